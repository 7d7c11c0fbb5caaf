//! Biological system - aging, passive upkeep, starvation and old-age death.

use crate::config::AgentConfig;
use forager_data::Agent;

/// Applies one tick of bookkeeping after the agent has acted.
///
/// Health and energy end the tick inside `[0, max]`. An agent that reaches its
/// maximum age has its health zeroed.
pub fn biological_system(agent: &mut Agent, config: &AgentConfig) {
    agent.vitals.age = agent.vitals.age.saturating_add(1);
    agent.vitals.energy -= config.passive_upkeep;

    if agent.vitals.energy < config.starvation_threshold {
        agent.vitals.hp -= config.starvation_damage;
    }
    if agent.vitals.age >= agent.stats.max_age {
        agent.vitals.hp = 0.0;
    }

    agent.vitals.hp = agent.vitals.hp.clamp(0.0, agent.stats.max_hp);
    agent.vitals.energy = agent.vitals.energy.clamp(0.0, agent.stats.max_energy);
}
