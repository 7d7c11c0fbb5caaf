use crate::model::world::World;
use forager_core::area::{zone_at, AreaLogic};
use forager_core::food::ProducerLogic;
use forager_core::metrics::{AGENTS_DIED, FOOD_PRODUCED, SOURCES_DESTROYED, SOURCES_EXPANDED};
use forager_core::systems::{update_agent, AgentContext};
use forager_data::{AreaKind, Food, FoodSource};
use rand::Rng;
use std::time::Instant;

/// Picks a random free cell within `radius` of `origin` that lies in `zone`.
///
/// One draw per call: a failed candidate means no expansion this tick.
fn expansion_cell<R: Rng>(
    rng: &mut R,
    origin: (u16, u16),
    zone: AreaKind,
    radius: i32,
    occupied: impl Fn(u16, u16) -> bool,
    width: u16,
    height: u16,
) -> Option<(u16, u16)> {
    let (dx, dy) = loop {
        let dx = rng.gen_range(-radius..=radius);
        let dy = rng.gen_range(-radius..=radius);
        if dx != 0 || dy != 0 {
            break (dx, dy);
        }
    };
    let x = i32::from(origin.0) + dx;
    let y = i32::from(origin.1) + dy;
    if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
        return None;
    }
    let (x, y) = (x as u16, y as u16);
    if zone_at(x, y, width, height) != zone || occupied(x, y) {
        return None;
    }
    Some((x, y))
}

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Order: producers (production, destruction, spreading), new food
    /// appended, food aged and expired, agents updated in insertion order,
    /// then dead agents dropped if configured.
    pub fn step(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();
        self.tick += 1;

        let produced = self.update_sources();
        self.metrics
            .add_to_counter(FOOD_PRODUCED, produced.len() as u64);
        self.food.extend(produced);
        self.food.retain_mut(|item| !item.update());

        self.update_agents()?;
        if self.config.world.remove_dead_agents {
            self.remove_dead_agents();
        }

        self.metrics.record_tick(started.elapsed(), self.counts());
        Ok(())
    }

    fn update_sources(&mut self) -> Vec<Food> {
        let mut produced = Vec::new();
        let mut offshoots: Vec<FoodSource> = Vec::new();
        let radius = self.config.world.expansion_radius;

        for idx in 0..self.sources.len() {
            let zone = self.sources[idx].area;
            let area = self.areas.get_mut(zone);
            let source = &mut self.sources[idx];
            if source.is_destroyed {
                continue;
            }

            if let Some(item) = source.update(area, &mut self.rng) {
                produced.push(item);
            }

            if source.is_destroyed {
                let (x, y) = (source.x, source.y);
                self.food.retain(|f| f.x != x || f.y != y);
                self.metrics.increment_counter(SOURCES_DESTROYED);
                tracing::debug!(tick = self.tick, x, y, kind = source.kind.label(), "Producer destroyed");
                continue;
            }

            if !self.rng.gen_bool(area.expansion_chance) {
                continue;
            }
            let origin = (source.x, source.y);
            let sources = &self.sources;
            let occupied = |x: u16, y: u16| {
                sources
                    .iter()
                    .chain(offshoots.iter())
                    .any(|s| !s.is_destroyed && s.x == x && s.y == y)
            };
            let Some((x, y)) = expansion_cell(
                &mut self.rng,
                origin,
                zone,
                radius,
                occupied,
                self.width,
                self.height,
            ) else {
                continue;
            };

            let area = self.areas.get_mut(zone);
            if !area.has_capacity() {
                continue;
            }
            area.register_source();
            let child = self.sources[idx].offshoot(x, y, zone);
            tracing::debug!(tick = self.tick, x, y, kind = child.kind.label(), "Producer spread");
            self.metrics.increment_counter(SOURCES_EXPANDED);
            offshoots.push(child);
        }

        self.sources.retain(|s| !s.is_destroyed);
        self.sources.extend(offshoots);
        produced
    }

    fn update_agents(&mut self) -> anyhow::Result<()> {
        let ctx = AgentContext {
            config: &self.config.agent,
            areas: &self.areas,
            sources: &self.sources,
            width: self.width,
            height: self.height,
        };

        for idx in 0..self.agents.len() {
            let (before, rest) = self.agents.split_at_mut(idx);
            let Some((agent, after)) = rest.split_first_mut() else {
                break;
            };
            let was_alive = agent.is_alive();
            update_agent(agent, before.iter().chain(after.iter()), &ctx)?;
            if was_alive && !agent.is_alive() {
                self.metrics.increment_counter(AGENTS_DIED);
                tracing::debug!(
                    tick = self.tick,
                    id = %agent.identity.id,
                    age = agent.vitals.age,
                    "Agent died"
                );
            }
        }
        Ok(())
    }

    fn remove_dead_agents(&mut self) {
        self.agents.retain(|a| a.is_alive());
    }
}
