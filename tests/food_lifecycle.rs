mod common;

use common::{sources_in, WorldBuilder};
use forager_core::area::zone_at;
use forager_core::metrics::{FOOD_PRODUCED, SOURCES_DESTROYED, SOURCES_EXPANDED};
use forager_data::{AreaKind, FoodSourceKind};

#[test]
fn test_grass_drops_every_hundred_ticks_in_world() {
    let mut world = WorldBuilder::new()
        .without_expansion()
        .with_source(FoodSourceKind::GrassPatch, 5, 5)
        .build();

    let mut drop_ticks = Vec::new();
    for _ in 0..999 {
        let before = world.metrics.counter(FOOD_PRODUCED);
        world.step().unwrap();
        if world.metrics.counter(FOOD_PRODUCED) > before {
            drop_ticks.push(world.tick);
        }
    }

    let expected: Vec<u64> = (1..10).map(|i| i * 100).collect();
    assert_eq!(drop_ticks, expected);
    assert!(world.food.iter().all(|f| (f.x, f.y) == (5, 5)));
}

#[test]
fn test_food_expires_after_its_lifetime() {
    let mut world = WorldBuilder::new()
        .without_expansion()
        .with_source(FoodSourceKind::GrassPatch, 5, 5)
        .build();

    // First drop at tick 100, aged in the same tick it appears.
    for _ in 0..100 {
        world.step().unwrap();
    }
    assert_eq!(world.food.len(), 1);
    assert_eq!(world.food[0].age, 1);

    for _ in 0..498 {
        world.step().unwrap();
    }
    // Tick 598: a second drop landed at 200 and more after; the first is at age 499.
    assert!(world.food.iter().any(|f| f.age == 499));

    world.step().unwrap();
    assert!(world.food.iter().all(|f| f.age < 500));
    assert!(world.food.iter().all(|f| !f.is_expired()));
}

#[test]
fn test_destroyed_source_takes_its_pile_with_it() {
    let mut world = WorldBuilder::new()
        .without_expansion()
        .with_source(FoodSourceKind::GrassPatch, 5, 5)
        .with_source(FoodSourceKind::GrassPatch, 20, 10)
        .build();
    // The second producer outlives the first.
    world.sources[1].params.lifespan = 5000;

    for _ in 0..999 {
        world.step().unwrap();
    }
    assert!(world.food.iter().any(|f| (f.x, f.y) == (5, 5)));
    assert!(world.food.iter().any(|f| (f.x, f.y) == (20, 10)));
    assert_eq!(world.areas.get(AreaKind::Meadow).current_food_sources, 2);

    world.step().unwrap();
    assert_eq!(world.tick, 1000);
    assert!(world.food.iter().all(|f| (f.x, f.y) != (5, 5)));
    assert!(world.food.iter().any(|f| (f.x, f.y) == (20, 10)));
    assert_eq!(world.sources.len(), 1);
    assert_eq!(world.areas.get(AreaKind::Meadow).current_food_sources, 1);
    assert_eq!(world.metrics.counter(SOURCES_DESTROYED), 1);
}

#[test]
fn test_expansion_stays_in_zone_and_under_cap() {
    let mut world = WorldBuilder::new()
        .with_seed(17)
        .without_expansion()
        .with_config(|c| {
            for area in &mut c.areas {
                if area.kind == AreaKind::Meadow {
                    area.expansion_chance = 1.0;
                }
            }
        })
        .with_source(FoodSourceKind::GrassPatch, 10, 10)
        .build();
    let cap = world.areas.get(AreaKind::Meadow).max_food_sources;

    for _ in 0..300 {
        world.step().unwrap();
        let meadow = world.areas.get(AreaKind::Meadow);
        assert!(meadow.current_food_sources <= cap);
        assert_eq!(meadow.current_food_sources, sources_in(&world, AreaKind::Meadow));
    }

    assert!(world.metrics.counter(SOURCES_EXPANDED) > 0);
    assert_eq!(world.areas.get(AreaKind::Meadow).current_food_sources, cap);
    for source in &world.sources {
        assert_eq!(source.area, AreaKind::Meadow);
        assert_eq!(source.kind, FoodSourceKind::GrassPatch);
        assert_eq!(zone_at(source.x, source.y, world.width, world.height), AreaKind::Meadow);
    }
    for (i, a) in world.sources.iter().enumerate() {
        for b in &world.sources[i + 1..] {
            assert!((a.x, a.y) != (b.x, b.y), "two producers share a cell");
        }
    }
}

#[test]
fn test_zone_counters_track_live_sources() {
    let mut world = WorldBuilder::new()
        .with_seed(3)
        .with_config(|c| {
            c.world.initial_sources_per_area = 3;
            for area in &mut c.areas {
                area.expansion_chance = 0.2;
            }
        })
        .build();

    for _ in 0..1500 {
        world.step().unwrap();
        for kind in AreaKind::ALL {
            let area = world.areas.get(kind);
            assert_eq!(area.current_food_sources, sources_in(&world, kind));
            assert!(area.current_food_sources <= area.max_food_sources);
        }
    }
}
