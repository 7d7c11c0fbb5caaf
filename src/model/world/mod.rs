use crate::model::config::AppConfig;
use forager_core::area::AreaTable;
use forager_core::metrics::{Metrics, TickCounts};
use forager_core::snapshot::{SnapshotInput, WorldSnapshot};
use forager_data::{Agent, Food, FoodSource};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

pub mod init;
pub mod update;

/// Canonical simulation state: zones, producers, food and agents.
///
/// Only one writer may advance a `World`; concurrent readers go through
/// [`crate::model::clock::SimulationClock`].
pub struct World {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub tick: u64,
    pub areas: AreaTable,
    pub sources: Vec<FoodSource>,
    pub food: Vec<Food>,
    pub agents: Vec<Agent>,
    pub config: AppConfig,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
}

impl World {
    #[must_use]
    pub fn agent(&self, id: Uuid) -> Option<&Agent> {
        self.agents.iter().find(|a| a.identity.id == id)
    }

    #[must_use]
    pub fn living_agents(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    /// Producers that have not been destroyed.
    pub fn live_sources(&self) -> impl Iterator<Item = &FoodSource> {
        self.sources.iter().filter(|s| !s.is_destroyed)
    }

    #[must_use]
    pub fn counts(&self) -> TickCounts {
        TickCounts {
            agents: self.agents.len(),
            food: self.food.len(),
            sources: self.live_sources().count(),
        }
    }

    /// Owned copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(SnapshotInput {
            tick: self.tick,
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            areas: &self.areas,
            sources: &self.sources,
            food: &self.food,
            agents: &self.agents,
        })
    }

    pub fn spawn_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }
}
