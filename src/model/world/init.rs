use crate::model::config::AppConfig;
use crate::model::world::World;
use anyhow::Context;
use forager_core::area::{zone_bounds, AreaLogic, AreaTable};
use forager_core::lifecycle;
use forager_core::metrics::Metrics;
use forager_data::{AreaKind, FoodSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random cell draws tried per initial producer before giving up on it.
const PLACEMENT_ATTEMPTS: usize = 64;

impl World {
    /// Builds a world from validated configuration, seeding producers in
    /// every zone and scattering the initial agents.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;

        let mut rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };

        let width = config.world.width;
        let height = config.world.height;
        let mut areas = AreaTable::from_config(&config.areas)?;
        let mut sources: Vec<FoodSource> = Vec::new();

        for kind in AreaKind::ALL {
            let row = config
                .area(kind)
                .with_context(|| format!("no area configured for {kind:?}"))?;
            let params = config.producers.get(row.producer);
            let ((x0, x1), (y0, y1)) = zone_bounds(kind, width, height);
            if x0 >= x1 || y0 >= y1 {
                tracing::warn!(zone = ?kind, "Zone has no cells; skipping initial producers");
                continue;
            }

            for _ in 0..config.world.initial_sources_per_area {
                if !areas.get(kind).has_capacity() {
                    break;
                }
                let cell = (0..PLACEMENT_ATTEMPTS)
                    .map(|_| (rng.gen_range(x0..x1), rng.gen_range(y0..y1)))
                    .find(|&(x, y)| !sources.iter().any(|s| s.x == x && s.y == y));
                let Some((x, y)) = cell else {
                    tracing::warn!(zone = ?kind, "No free cell for initial producer");
                    break;
                };
                sources.push(FoodSource::new(row.producer, x, y, kind, params));
                areas.get_mut(kind).register_source();
            }
        }

        let agents = (0..config.world.initial_agents)
            .map(|_| {
                let x = rng.gen_range(0.0..f64::from(width));
                let y = rng.gen_range(0.0..f64::from(height));
                lifecycle::create_agent_with_rng(x, y, &config.agent, &mut rng)
            })
            .collect::<Vec<_>>();

        tracing::info!(
            width,
            height,
            sources = sources.len(),
            agents = agents.len(),
            seed = ?config.world.seed,
            fingerprint = %config.fingerprint(),
            "World created"
        );

        Ok(Self {
            width,
            height,
            cell_size: config.world.cell_size,
            tick: 0,
            areas,
            sources,
            food: Vec::new(),
            agents,
            config,
            metrics: Metrics::new(),
            rng,
        })
    }
}
