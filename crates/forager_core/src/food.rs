//! Producer lifecycle: regeneration, production, expiry and destruction.

use crate::area::AreaLogic;
pub use forager_data::{Food, FoodSource, FoodSourceKind, ProducerParams, ProductionPolicy};
use forager_data::{Area, AreaKind};
use rand::Rng;

/// Stock parameters for each producer variant.
#[must_use]
pub fn default_params(kind: FoodSourceKind) -> ProducerParams {
    match kind {
        FoodSourceKind::GrassPatch => ProducerParams {
            capacity: 100.0,
            regen_rate: 0.1,
            policy: ProductionPolicy::Interval { every: 100 },
            cost: 10.0,
            food_value: 20.0,
            food_expiry: 500,
            lifespan: 1000,
        },
        FoodSourceKind::BerryBush => ProducerParams {
            capacity: 40.0,
            regen_rate: 0.05,
            policy: ProductionPolicy::RandomDrop { chance: 0.04 },
            cost: 5.0,
            food_value: 10.0,
            food_expiry: 1000,
            lifespan: 1000,
        },
        FoodSourceKind::FruitTree => ProducerParams {
            capacity: 50.0,
            regen_rate: 0.08,
            policy: ProductionPolicy::Interval { every: 100 },
            cost: 10.0,
            food_value: 30.0,
            food_expiry: 1200,
            lifespan: 4000,
        },
        FoodSourceKind::CactusPads => ProducerParams {
            capacity: 30.0,
            regen_rate: 0.03,
            policy: ProductionPolicy::Interval { every: 80 },
            cost: 5.0,
            food_value: 15.0,
            food_expiry: 400,
            lifespan: 5000,
        },
    }
}

pub trait ProducerLogic {
    /// Advances the producer one tick, possibly dropping a [`Food`].
    ///
    /// `area` must be the producer's own zone; it supplies the regen
    /// modifier and receives the counter decrement if the producer dies.
    fn update<R: Rng>(&mut self, area: &mut Area, rng: &mut R) -> Option<Food>;
    /// Marks the producer destroyed. Only the first call releases its area slot.
    fn destroy(&mut self, area: &mut Area);
    /// A fresh producer of the same variant at another cell.
    fn offshoot(&self, x: u16, y: u16, area: AreaKind) -> FoodSource;
}

impl ProducerLogic for FoodSource {
    fn update<R: Rng>(&mut self, area: &mut Area, rng: &mut R) -> Option<Food> {
        if self.is_destroyed {
            return None;
        }

        self.age += 1;
        if self.age >= self.params.lifespan {
            self.destroy(area);
            return None;
        }

        if self.food_left < self.params.capacity {
            let regen = self.params.regen_rate * area.food_regen_modifier;
            self.food_left = (self.food_left + regen).min(self.params.capacity);
        }

        let drop = match self.params.policy {
            ProductionPolicy::Interval { every } => {
                self.tick_count = self.tick_count.saturating_add(1);
                if self.tick_count >= every && self.food_left >= self.params.cost {
                    self.tick_count = 0;
                    true
                } else {
                    false
                }
            }
            ProductionPolicy::RandomDrop { chance } => {
                rng.gen_bool(chance) && self.food_left >= self.params.cost
            }
        };

        if !drop {
            return None;
        }

        self.food_left = (self.food_left - self.params.cost).max(0.0);
        Some(Food::new(
            self.x,
            self.y,
            self.params.food_value,
            self.kind,
            self.params.food_expiry,
        ))
    }

    fn destroy(&mut self, area: &mut Area) {
        if self.is_destroyed {
            return;
        }
        self.is_destroyed = true;
        area.release_source();
    }

    fn offshoot(&self, x: u16, y: u16, area: AreaKind) -> FoodSource {
        FoodSource::new(self.kind, x, y, area, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaTable;
    use crate::config::default_areas;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn meadow() -> Area {
        AreaTable::from_config(&default_areas())
            .unwrap()
            .get(AreaKind::Meadow)
            .clone()
    }

    fn grass_at(area: &mut Area) -> FoodSource {
        area.register_source();
        FoodSource::new(
            FoodSourceKind::GrassPatch,
            5,
            5,
            area.kind,
            default_params(FoodSourceKind::GrassPatch),
        )
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut area = meadow();
        let mut other = grass_at(&mut area);
        let mut source = grass_at(&mut area);
        assert_eq!(area.current_food_sources, 2);

        source.destroy(&mut area);
        source.destroy(&mut area);
        assert!(source.is_destroyed);
        assert_eq!(area.current_food_sources, 1);

        other.destroy(&mut area);
        assert_eq!(area.current_food_sources, 0);
    }

    #[test]
    fn test_interval_production_cadence() {
        let mut area = meadow();
        let mut source = grass_at(&mut area);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut drop_ticks = Vec::new();
        for tick in 1..1000u64 {
            assert!(source.food_left >= 10.0);
            if source.update(&mut area, &mut rng).is_some() {
                drop_ticks.push(tick);
            }
        }
        let expected: Vec<u64> = (1..10).map(|i| i * 100).collect();
        assert_eq!(drop_ticks, expected);
    }

    #[test]
    fn test_dropped_food_matches_variant() {
        let mut area = meadow();
        let mut source = grass_at(&mut area);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let food = (0..100)
            .find_map(|_| source.update(&mut area, &mut rng))
            .expect("grass drops on its 100th tick");
        assert_eq!((food.x, food.y), (5, 5));
        assert_eq!(food.value, 20.0);
        assert_eq!(food.expiry_time, 500);
        assert_eq!(food.kind, FoodSourceKind::GrassPatch);
    }

    #[test]
    fn test_lifespan_destroys_once() {
        let mut area = meadow();
        let mut source = grass_at(&mut area);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..999 {
            source.update(&mut area, &mut rng);
        }
        assert!(!source.is_destroyed);
        assert!(source.update(&mut area, &mut rng).is_none());
        assert!(source.is_destroyed);
        assert_eq!(area.current_food_sources, 0);

        let age = source.age;
        assert!(source.update(&mut area, &mut rng).is_none());
        assert_eq!(source.age, age);
        assert_eq!(area.current_food_sources, 0);
    }

    #[test]
    fn test_regen_scaled_by_area_and_capped() {
        let mut area = meadow();
        area.food_regen_modifier = 2.0;
        let mut source = grass_at(&mut area);
        source.food_left = 50.0;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        source.update(&mut area, &mut rng);
        assert!((source.food_left - 50.2).abs() < 1e-9);

        source.food_left = 99.95;
        source.update(&mut area, &mut rng);
        assert_eq!(source.food_left, 100.0);
    }

    #[test]
    fn test_interval_waits_for_stock() {
        let mut area = meadow();
        area.food_regen_modifier = 0.0;
        let mut source = grass_at(&mut area);
        source.food_left = 5.0;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..300 {
            assert!(source.update(&mut area, &mut rng).is_none());
        }
        source.food_left = 10.0;
        assert!(source.update(&mut area, &mut rng).is_some());
        assert_eq!(source.food_left, 0.0);
    }

    #[test]
    fn test_random_drop_extremes() {
        let mut area = meadow();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut params = default_params(FoodSourceKind::BerryBush);

        params.policy = ProductionPolicy::RandomDrop { chance: 1.0 };
        let mut always = FoodSource::new(FoodSourceKind::BerryBush, 1, 1, AreaKind::Meadow, params);
        assert!(always.update(&mut area, &mut rng).is_some());
        assert!((always.food_left - 35.0).abs() < 1e-9);

        params.policy = ProductionPolicy::RandomDrop { chance: 0.0 };
        let mut never = FoodSource::new(FoodSourceKind::BerryBush, 1, 1, AreaKind::Meadow, params);
        for _ in 0..500 {
            assert!(never.update(&mut area, &mut rng).is_none());
        }
    }

    #[test]
    fn test_offshoot_is_fresh_copy() {
        let mut area = meadow();
        let mut source = grass_at(&mut area);
        source.age = 400;
        source.food_left = 3.0;
        let child = source.offshoot(7, 8, AreaKind::Meadow);
        assert_eq!(child.kind, source.kind);
        assert_eq!((child.x, child.y), (7, 8));
        assert_eq!(child.age, 0);
        assert_eq!(child.food_left, child.params.capacity);
        assert!(!child.is_destroyed);
    }
}
