//! Per-agent systems, run in order: perception, decision, action, biology.

pub mod action;
pub mod biological;
pub mod perception;

use crate::area::{zone_at_position, AreaTable};
use crate::brain::PolicyLogic;
use crate::config::AgentConfig;
use crate::error::Result;
use forager_data::{Action, Agent, FoodSource};

pub struct AgentContext<'a> {
    pub config: &'a AgentConfig,
    pub areas: &'a AreaTable,
    pub sources: &'a [FoodSource],
    pub width: u16,
    pub height: u16,
}

/// Runs one full sense-decide-act cycle for a living agent.
///
/// Returns the action taken, or `None` when the agent was already dead and
/// therefore skipped.
pub fn update_agent<'a, I>(agent: &mut Agent, others: I, ctx: &AgentContext) -> Result<Option<Action>>
where
    I: IntoIterator<Item = &'a Agent>,
{
    if !agent.is_alive() {
        return Ok(None);
    }

    let percept = perception::sense(
        agent,
        others,
        &perception::PerceptionContext {
            sources: ctx.sources,
            width: ctx.width,
            height: ctx.height,
            density_cap: ctx.config.density_cap,
        },
    );
    agent.last_target = percept.nearest_agent;

    let decision = agent.policy.decide(&percept.inputs)?;

    let zone = zone_at_position(agent.position.x, agent.position.y, ctx.width, ctx.height);
    action::action_system(
        agent,
        decision,
        &action::ActionContext {
            config: ctx.config,
            width: ctx.width,
            height: ctx.height,
            speed_modifier: ctx.areas.get(zone).speed_modifier,
        },
    );
    biological::biological_system(agent, ctx.config);

    Ok(Some(decision.action))
}
