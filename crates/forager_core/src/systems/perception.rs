//! Perception system - builds the sensory vector from nearby producers and agents.

use crate::brain::POLICY_INPUTS;
use forager_data::{Agent, FoodSource, SensedTarget};

pub struct PerceptionContext<'a> {
    pub sources: &'a [FoodSource],
    pub width: u16,
    pub height: u16,
    /// Neighbour count that saturates the density input.
    pub density_cap: f64,
}

/// Sensory vector plus the nearest agent it was computed from.
#[derive(Debug, Clone)]
pub struct Percept {
    pub inputs: [f32; POLICY_INPUTS],
    pub nearest_agent: Option<SensedTarget>,
}

/// Normalized distance and direction toward a sensed point, or the
/// "nothing in range" sentinel `(1.0, 0.0, 0.0)`.
fn bearing_features(dist: Option<(f64, f64, f64)>, sight: f64) -> (f32, f32, f32) {
    match dist {
        Some((d, dx, dy)) => {
            let (ux, uy) = if d > 0.0 { (dx / d, dy / d) } else { (0.0, 0.0) };
            ((d / sight.max(1e-9)).min(1.0) as f32, ux as f32, uy as f32)
        }
        None => (1.0, 0.0, 0.0),
    }
}

/// Nearest live producer within sight, as `(distance, dx, dy)` to its cell center.
pub fn sense_nearest_food(agent: &Agent, sources: &[FoodSource]) -> Option<(f64, f64, f64)> {
    let sight = agent.stats.sight;
    let mut best: Option<(f64, f64, f64)> = None;
    for source in sources.iter().filter(|s| !s.is_destroyed) {
        let dx = f64::from(source.x) + 0.5 - agent.position.x;
        let dy = f64::from(source.y) + 0.5 - agent.position.y;
        let d = (dx * dx + dy * dy).sqrt();
        if d <= sight && best.map_or(true, |(bd, ..)| d < bd) {
            best = Some((d, dx, dy));
        }
    }
    best
}

/// Builds the sensory vector for `agent`.
///
/// `others` must not contain the agent itself. Both nearest-entity searches
/// are plain linear scans.
pub fn sense<'a, I>(agent: &Agent, others: I, ctx: &PerceptionContext) -> Percept
where
    I: IntoIterator<Item = &'a Agent>,
{
    let sight = agent.stats.sight;

    let mut nearby = 0usize;
    let mut nearest: Option<(f64, &Agent)> = None;
    for other in others.into_iter().filter(|o| o.is_alive()) {
        let d = agent
            .position
            .distance_to(other.position.x, other.position.y);
        if d > sight {
            continue;
        }
        nearby += 1;
        if nearest.map_or(true, |(bd, _)| d < bd) {
            nearest = Some((d, other));
        }
    }

    let (food_d, food_x, food_y) = bearing_features(sense_nearest_food(agent, ctx.sources), sight);
    let (agent_d, agent_x, agent_y) = bearing_features(
        nearest.map(|(d, o)| {
            (
                d,
                o.position.x - agent.position.x,
                o.position.y - agent.position.y,
            )
        }),
        sight,
    );

    let rad = agent.heading.to_radians();
    let inputs = [
        (agent.vitals.hp / agent.stats.max_hp.max(1.0)) as f32,
        (agent.vitals.energy / agent.stats.max_energy.max(1.0)) as f32,
        (agent.vitals.age as f64 / agent.stats.max_age.max(1) as f64) as f32,
        (agent.position.x / f64::from(ctx.width.max(1))) as f32,
        (agent.position.y / f64::from(ctx.height.max(1))) as f32,
        rad.cos() as f32,
        rad.sin() as f32,
        food_d,
        food_x,
        food_y,
        (nearby as f64 / ctx.density_cap).min(1.0) as f32,
        agent_d,
        agent_x,
        agent_y,
        1.0,
    ];

    Percept {
        inputs,
        nearest_agent: nearest.map(|(_, o)| SensedTarget {
            id: o.identity.id,
            x: o.position.x,
            y: o.position.y,
        }),
    }
}
