mod common;

use common::WorldBuilder;
use forager_lib::model::config::AppConfig;
use forager_lib::model::world::World;

fn seeded_world(seed: u64) -> World {
    WorldBuilder::new()
        .with_seed(seed)
        .with_config(|c| {
            c.world.initial_agents = 30;
            c.world.initial_sources_per_area = 3;
            for area in &mut c.areas {
                area.expansion_chance = 0.05;
            }
        })
        .build()
}

#[test]
fn test_determinism_consistency() {
    let mut world1 = seeded_world(12345);
    let mut world2 = seeded_world(12345);

    for _ in 0..400 {
        world1.step().unwrap();
        world2.step().unwrap();
    }

    assert_eq!(world1.tick, world2.tick);
    assert_eq!(world1.agents.len(), world2.agents.len(), "Agent counts should match");
    for (a, b) in world1.agents.iter().zip(&world2.agents) {
        assert_eq!(a, b, "Agent {} diverged", a.identity.id);
    }
    assert_eq!(world1.sources, world2.sources);
    assert_eq!(world1.food, world2.food);
    assert_eq!(world1.snapshot(), world2.snapshot());
}

#[test]
fn test_different_seeds_diverge() {
    let world1 = seeded_world(1);
    let world2 = seeded_world(2);
    let ids1: Vec<_> = world1.agents.iter().map(|a| a.identity.id).collect();
    let ids2: Vec<_> = world2.agents.iter().map(|a| a.identity.id).collect();
    assert_ne!(ids1, ids2);
}

#[test]
fn test_fingerprint_tracks_parameters() {
    let base = AppConfig::default();
    let mut tweaked = AppConfig::default();
    tweaked.agent.mate_cost += 0.1;
    assert_eq!(base.fingerprint(), AppConfig::default().fingerprint());
    assert_ne!(base.fingerprint(), tweaked.fingerprint());
}
