//! Owned, serializable world views for renderers and exports.

use crate::area::AreaTable;
use forager_data::{Action, Agent, AreaKind, Food, FoodSource, FoodSourceKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaSnapshot {
    pub kind: AreaKind,
    pub name: String,
    pub color: (u8, u8, u8),
    pub current_food_sources: usize,
    pub max_food_sources: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceSnapshot {
    pub x: u16,
    pub y: u16,
    pub kind: FoodSourceKind,
    pub area: AreaKind,
    pub color: (u8, u8, u8),
    pub capacity_ratio: f64,
    /// Food items lying on this source's cell.
    pub pending_food: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub hp_ratio: f64,
    pub energy_ratio: f64,
    pub age: u64,
    pub alive: bool,
    pub last_action: Action,
}

impl AgentSnapshot {
    #[must_use]
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            id: agent.identity.id,
            x: agent.position.x,
            y: agent.position.y,
            heading: agent.heading,
            hp_ratio: agent.vitals.hp / agent.stats.max_hp.max(f64::EPSILON),
            energy_ratio: agent.vitals.energy / agent.stats.max_energy.max(f64::EPSILON),
            age: agent.vitals.age,
            alive: agent.is_alive(),
            last_action: agent.last_action,
        }
    }
}

/// Owned, render-ready copy of the world taken under the world lock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub areas: Vec<AreaSnapshot>,
    pub sources: Vec<SourceSnapshot>,
    pub food: Vec<Food>,
    pub agents: Vec<AgentSnapshot>,
}

pub struct SnapshotInput<'a> {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub areas: &'a AreaTable,
    pub sources: &'a [FoodSource],
    pub food: &'a [Food],
    pub agents: &'a [Agent],
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(input: SnapshotInput<'_>) -> Self {
        let mut piles: HashMap<(u16, u16), usize> = HashMap::new();
        for item in input.food {
            *piles.entry((item.x, item.y)).or_insert(0) += 1;
        }

        let areas = input
            .areas
            .iter()
            .map(|a| AreaSnapshot {
                kind: a.kind,
                name: a.name.clone(),
                color: a.color,
                current_food_sources: a.current_food_sources,
                max_food_sources: a.max_food_sources,
            })
            .collect();

        let sources = input
            .sources
            .iter()
            .filter(|s| !s.is_destroyed)
            .map(|s| SourceSnapshot {
                x: s.x,
                y: s.y,
                kind: s.kind,
                area: s.area,
                color: input.areas.get(s.area).color,
                capacity_ratio: s.capacity_ratio(),
                pending_food: piles.get(&(s.x, s.y)).copied().unwrap_or(0),
            })
            .collect();

        Self {
            tick: input.tick,
            width: input.width,
            height: input.height,
            cell_size: input.cell_size,
            areas,
            sources,
            food: input.food.to_vec(),
            agents: input.agents.iter().map(AgentSnapshot::from_agent).collect(),
        }
    }

    #[must_use]
    pub fn living_agents(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }
}
