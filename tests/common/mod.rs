pub mod macros;

use forager_core::area::AreaLogic;
use forager_data::{Agent, AreaKind, FoodSource, FoodSourceKind};
use forager_lib::model::config::AppConfig;
use forager_lib::model::lifecycle;
use forager_lib::model::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    sources: Vec<(FoodSourceKind, u16, u16)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// An empty 60x40 world: no initial agents, no initial producers.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_agents = 0;
        config.world.initial_sources_per_area = 0;
        config.world.seed = Some(0);
        Self {
            config,
            agents: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Disables producer spreading in every zone.
    pub fn without_expansion(self) -> Self {
        self.with_config(|c| {
            for area in &mut c.areas {
                area.expansion_chance = 0.0;
            }
        })
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_source(mut self, kind: FoodSourceKind, x: u16, y: u16) -> Self {
        self.sources.push((kind, x, y));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for (kind, x, y) in self.sources {
            let zone = forager_core::zone_at(x, y, world.width, world.height);
            let params = world.config.producers.get(kind);
            world.areas.get_mut(zone).register_source();
            world.sources.push(FoodSource::new(kind, x, y, zone, params));
        }
        for agent in self.agents {
            world.spawn_agent(agent);
        }
        world
    }
}

/// A default-config agent at `(x, y)` drawn from a seeded RNG.
#[allow(dead_code)]
pub fn agent_at(x: f64, y: f64, seed: u64) -> Agent {
    let config = AppConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    lifecycle::create_agent_with_rng(x, y, &config.agent, &mut rng)
}

/// Live producers per zone, counted from the source list.
#[allow(dead_code)]
pub fn sources_in(world: &World, kind: AreaKind) -> usize {
    world.live_sources().filter(|s| s.area == kind).count()
}
