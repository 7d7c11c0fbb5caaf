use super::environment::AreaKind;
use serde::{Deserialize, Serialize};

/// Producer variants. Behavior differences are carried by [`ProducerParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodSourceKind {
    GrassPatch,
    BerryBush,
    FruitTree,
    CactusPads,
}

impl FoodSourceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FoodSourceKind::GrassPatch => "grass patch",
            FoodSourceKind::BerryBush => "berry bush",
            FoodSourceKind::FruitTree => "fruit tree",
            FoodSourceKind::CactusPads => "cactus pads",
        }
    }
}

/// When a producer drops food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProductionPolicy {
    /// Drop once every `every` ticks, provided enough stock is left.
    Interval { every: u32 },
    /// Independent per-tick chance of dropping.
    RandomDrop { chance: f64 },
}

/// Variant configuration record for a producer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProducerParams {
    /// Stock ceiling.
    pub capacity: f64,
    /// Stock regained per tick before the area modifier.
    pub regen_rate: f64,
    pub policy: ProductionPolicy,
    /// Stock consumed per dropped item.
    pub cost: f64,
    /// Energy value of each dropped item.
    pub food_value: f64,
    /// Ticks a dropped item survives.
    pub food_expiry: u64,
    /// Ticks the producer itself survives.
    pub lifespan: u64,
}

/// A stationary producer occupying one grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    pub kind: FoodSourceKind,
    pub x: u16,
    pub y: u16,
    /// Zone whose modifiers and counter this producer uses.
    pub area: AreaKind,
    pub params: ProducerParams,
    pub food_left: f64,
    pub age: u64,
    /// Ticks since the last interval drop.
    pub tick_count: u32,
    pub is_destroyed: bool,
}

impl FoodSource {
    /// A fresh producer with full stock.
    #[must_use]
    pub fn new(kind: FoodSourceKind, x: u16, y: u16, area: AreaKind, params: ProducerParams) -> Self {
        Self {
            kind,
            x,
            y,
            area,
            params,
            food_left: params.capacity,
            age: 0,
            tick_count: 0,
            is_destroyed: false,
        }
    }

    #[must_use]
    pub fn capacity_ratio(&self) -> f64 {
        if self.params.capacity <= 0.0 {
            return 0.0;
        }
        (self.food_left / self.params.capacity).clamp(0.0, 1.0)
    }
}

/// A consumable item lying on a grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub x: u16,
    pub y: u16,
    /// Energy provided when eaten.
    pub value: f64,
    /// Producer variant that dropped it.
    pub kind: FoodSourceKind,
    pub expiry_time: u64,
    pub age: u64,
}

impl Food {
    #[must_use]
    pub fn new(x: u16, y: u16, value: f64, kind: FoodSourceKind, expiry_time: u64) -> Self {
        Self {
            x,
            y,
            value,
            kind,
            expiry_time,
            age: 0,
        }
    }

    /// Ages the item by one tick and reports whether it has now expired.
    pub fn update(&mut self) -> bool {
        self.age += 1;
        self.is_expired()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.expiry_time
    }
}
