//! Agent creation: point allocation and body-stat derivation.

use crate::brain::PolicyLogic;
use crate::config::AgentConfig;
use crate::systems::action::normalize_heading;
use forager_data::{
    Action, Agent, BodyPoints, BodyStats, Identity, Policy, Position, Stat, Vitals,
};
use rand::Rng;
use uuid::Uuid;

/// Spreads `total` points across the stats, one uniformly random stat per point.
pub fn allocate_points<R: Rng>(total: u32, rng: &mut R) -> BodyPoints {
    let mut points = BodyPoints::default();
    for _ in 0..total {
        let stat = Stat::ALL[rng.gen_range(0..Stat::COUNT)];
        points.add(stat, 1);
    }
    points
}

#[must_use]
pub fn derive_stats(points: &BodyPoints, config: &AgentConfig) -> BodyStats {
    BodyStats {
        max_hp: config.hp.apply(points.get(Stat::Hp)),
        max_energy: config.energy.apply(points.get(Stat::Energy)),
        base_speed: config.speed.apply(points.get(Stat::Speed)),
        attack_power: config.attack.apply(points.get(Stat::Attack)),
        max_age: config.lifespan.apply(points.get(Stat::Lifespan)).round().max(1.0) as u64,
        sight: config.sight.apply(points.get(Stat::Sight)),
        agility: config.agility.apply(points.get(Stat::Agility)),
    }
}

/// Builds an agent at full health and energy from explicit parts.
#[must_use]
pub fn assemble_agent(
    id: Uuid,
    x: f64,
    y: f64,
    heading: f64,
    points: BodyPoints,
    policy: Policy,
    config: &AgentConfig,
) -> Agent {
    let stats = derive_stats(&points, config);
    Agent {
        identity: Identity { id },
        position: Position { x, y },
        heading: normalize_heading(heading),
        points,
        stats,
        vitals: Vitals {
            hp: stats.max_hp,
            energy: stats.max_energy,
            age: 0,
        },
        policy,
        last_action: Action::Idle,
        last_target: None,
    }
}

pub fn create_agent_with_rng<R: Rng>(x: f64, y: f64, config: &AgentConfig, rng: &mut R) -> Agent {
    let id = Uuid::from_u128(rng.gen::<u128>());
    let heading = rng.gen_range(0.0..360.0);
    let points = allocate_points(config.body_points, rng);
    let policy = Policy::new_random_with_rng(rng);
    assemble_agent(id, x, y, heading, points, policy, config)
}
