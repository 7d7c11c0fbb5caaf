//! Action system - executes decisions and integrates movement with edge reflection.

use crate::brain::Decision;
use crate::config::AgentConfig;
use forager_data::{Action, Agent, Position};

/// Keeps reflected coordinates strictly below the upper bound.
const EDGE: f64 = 1e-6;

pub struct ActionContext<'a> {
    pub config: &'a AgentConfig,
    pub width: u16,
    pub height: u16,
    /// Speed modifier of the zone the agent stands in.
    pub speed_modifier: f64,
}

/// Maps an intensity in (-1, 1) onto [0, 1].
#[must_use]
pub fn rescale_intensity(intensity: f32) -> f64 {
    (0.5 + 0.5 * f64::from(intensity)).clamp(0.0, 1.0)
}

/// Speed multiplier for a rescaled intensity: 0.2 at rest effort, 1.5 at full.
#[must_use]
pub fn effort_speed(base_speed: f64, rescaled: f64) -> f64 {
    base_speed * (0.2 + 1.3 * rescaled)
}

/// Wraps degrees into `[0, 360)`.
///
/// `rem_euclid` alone can round a tiny negative angle up to exactly 360.
#[must_use]
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Mirror of `value` about whichever bound of `[0, bound)` it crossed.
fn mirror(value: f64, bound: f64) -> Option<f64> {
    if value >= bound {
        Some(2.0 * bound - value)
    } else if value < 0.0 {
        Some(-value)
    } else {
        None
    }
}

/// Moves `position` along `heading` (degrees, y grows downward) and reflects
/// off the `[0, width) × [0, height)` box.
///
/// A coordinate that leaves the box is mirrored about the crossed bound and
/// the matching heading component is inverted: `180 - h` for a horizontal
/// crossing, `360 - h` for a vertical one.
pub fn advance(position: &mut Position, heading: &mut f64, speed: f64, width: f64, height: f64) {
    let rad = heading.to_radians();
    let mut new_x = position.x + rad.cos() * speed;
    let mut new_y = position.y - rad.sin() * speed;
    let mut new_heading = *heading;

    if let Some(mirrored) = mirror(new_x, width) {
        new_x = mirrored;
        new_heading = 180.0 - new_heading;
    }
    if let Some(mirrored) = mirror(new_y, height) {
        new_y = mirrored;
        new_heading = 360.0 - new_heading;
    }

    position.x = new_x.clamp(0.0, (width - EDGE).max(0.0));
    position.y = new_y.clamp(0.0, (height - EDGE).max(0.0));
    *heading = normalize_heading(new_heading);
}

/// Bearing in degrees from `from` toward `(x, y)`, same convention as headings.
#[must_use]
pub fn bearing_to(from: &Position, x: f64, y: f64) -> f64 {
    let dx = x - from.x;
    let dy = from.y - y;
    normalize_heading(dy.atan2(dx).to_degrees())
}

fn spend(agent: &mut Agent, amount: f64) {
    agent.vitals.energy = (agent.vitals.energy - amount).max(0.0);
}

fn move_with_effort(agent: &mut Agent, rescaled: f64, ctx: &ActionContext) {
    let speed = effort_speed(agent.stats.base_speed, rescaled) * ctx.speed_modifier;
    advance(
        &mut agent.position,
        &mut agent.heading,
        speed,
        f64::from(ctx.width),
        f64::from(ctx.height),
    );
    spend(
        agent,
        ctx.config.move_cost_base + ctx.config.move_cost_scale * rescaled,
    );
}

fn handle_move(agent: &mut Agent, turn: f32, intensity: f32, ctx: &ActionContext) {
    agent.heading = normalize_heading(agent.heading + f64::from(turn) * agent.stats.agility * 0.5);
    move_with_effort(agent, rescale_intensity(intensity), ctx);
}

fn handle_flee(agent: &mut Agent, turn: f32, intensity: f32, ctx: &ActionContext) {
    let Some((tx, ty)) = agent.last_target.as_ref().map(|t| (t.x, t.y)) else {
        handle_move(agent, turn, intensity, ctx);
        return;
    };
    agent.heading = normalize_heading(bearing_to(&agent.position, tx, ty) + 180.0);
    let rescaled = rescale_intensity(intensity).max(ctx.config.flee_min_intensity);
    move_with_effort(agent, rescaled, ctx);
}

/// Executes the chosen action. Aging and upkeep happen separately.
pub fn action_system(agent: &mut Agent, decision: Decision, ctx: &ActionContext) {
    match decision.action {
        Action::Move => handle_move(agent, decision.turn, decision.intensity, ctx),
        Action::Idle => {
            agent.vitals.energy =
                (agent.vitals.energy + ctx.config.idle_recovery).min(agent.stats.max_energy);
        }
        Action::Flee => handle_flee(agent, decision.turn, decision.intensity, ctx),
        // No offspring or damage is resolved; only the effort is paid.
        Action::Mate => spend(agent, ctx.config.mate_cost),
        Action::Attack => spend(agent, ctx.config.attack_cost),
    }
    agent.last_action = decision.action;
}
