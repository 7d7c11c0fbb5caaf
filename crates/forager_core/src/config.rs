//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. The configuration is read once when the world is
//! built and is never consulted from disk again.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 60
//! height = 40
//! seed = 42
//!
//! [agent]
//! body_points = 35
//! flee_min_intensity = 0.8
//!
//! [producers.grass_patch]
//! capacity = 100.0
//! regen_rate = 0.1
//! policy = { mode = "interval", every = 100 }
//! cost = 10.0
//! food_value = 20.0
//! food_expiry = 500
//! lifespan = 1000
//! ```

use crate::food::default_params;
use forager_data::{AreaKind, FoodSourceKind, ProducerParams, ProductionPolicy};
use serde::{Deserialize, Serialize};

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Pixel size of one cell; only the renderer uses it.
    pub cell_size: u16,
    pub seed: Option<u64>,
    pub initial_agents: usize,
    pub initial_sources_per_area: usize,
    /// Pause between ticks of the background clock.
    pub tick_interval_ms: u64,
    /// Drop agents from the world once their health reaches zero.
    pub remove_dead_agents: bool,
    /// Largest cell offset a spreading producer may jump.
    pub expansion_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            cell_size: 16,
            seed: None,
            initial_agents: 20,
            initial_sources_per_area: 3,
            tick_interval_ms: 10,
            remove_dead_agents: true,
            expansion_radius: 2,
        }
    }
}

/// `base + k * sqrt(points)` scaling for one derived stat.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatCurve {
    pub base: f64,
    pub k: f64,
}

impl StatCurve {
    #[must_use]
    pub const fn new(base: f64, k: f64) -> Self {
        Self { base, k }
    }

    #[must_use]
    pub fn apply(&self, points: u32) -> f64 {
        self.base + self.k * f64::from(points).sqrt()
    }
}

/// Agent body and energy economy.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    /// Size of the point pool spread across the seven stats.
    pub body_points: u32,
    pub hp: StatCurve,
    pub energy: StatCurve,
    pub speed: StatCurve,
    pub attack: StatCurve,
    pub lifespan: StatCurve,
    pub sight: StatCurve,
    pub agility: StatCurve,
    pub move_cost_base: f64,
    pub move_cost_scale: f64,
    pub idle_recovery: f64,
    pub passive_upkeep: f64,
    pub mate_cost: f64,
    pub attack_cost: f64,
    /// Rescaled intensity floor used while fleeing.
    pub flee_min_intensity: f64,
    /// Neighbour count that saturates the density sense.
    pub density_cap: f64,
    /// Energy level below which the agent starts losing health.
    pub starvation_threshold: f64,
    pub starvation_damage: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            body_points: 35,
            hp: StatCurve::new(50.0, 10.0),
            energy: StatCurve::new(50.0, 10.0),
            speed: StatCurve::new(0.2, 0.1),
            attack: StatCurve::new(1.0, 1.0),
            lifespan: StatCurve::new(2000.0, 600.0),
            sight: StatCurve::new(4.0, 1.5),
            agility: StatCurve::new(10.0, 6.0),
            move_cost_base: 0.02,
            move_cost_scale: 0.06,
            idle_recovery: 0.05,
            passive_upkeep: 0.005,
            mate_cost: 0.5,
            attack_cost: 0.3,
            flee_min_intensity: 0.8,
            density_cap: 10.0,
            starvation_threshold: 0.5,
            starvation_damage: 0.1,
        }
    }
}

impl AgentConfig {
    /// Every stat curve with its display name.
    #[must_use]
    pub fn curves(&self) -> [(&'static str, StatCurve); 7] {
        [
            ("Health", self.hp),
            ("Energy", self.energy),
            ("Speed", self.speed),
            ("Attack", self.attack),
            ("Lifespan", self.lifespan),
            ("Sight", self.sight),
            ("Agility", self.agility),
        ]
    }
}

/// One row of the area parameter table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AreaConfig {
    pub kind: AreaKind,
    pub id: u32,
    pub name: String,
    pub speed_modifier: f64,
    pub food_regen_modifier: f64,
    pub expansion_chance: f64,
    pub color: (u8, u8, u8),
    pub max_food_sources: usize,
    /// Producer variant seeded into the zone at world creation.
    pub producer: FoodSourceKind,
}

#[must_use]
pub fn default_areas() -> Vec<AreaConfig> {
    vec![
        AreaConfig {
            kind: AreaKind::Meadow,
            id: 1,
            name: "Meadow".to_string(),
            speed_modifier: 1.0,
            food_regen_modifier: 1.0,
            expansion_chance: 0.002,
            color: (86, 160, 72),
            max_food_sources: 8,
            producer: FoodSourceKind::GrassPatch,
        },
        AreaConfig {
            kind: AreaKind::Thicket,
            id: 2,
            name: "Thicket".to_string(),
            speed_modifier: 0.7,
            food_regen_modifier: 1.2,
            expansion_chance: 0.0015,
            color: (120, 70, 140),
            max_food_sources: 6,
            producer: FoodSourceKind::BerryBush,
        },
        AreaConfig {
            kind: AreaKind::Grove,
            id: 3,
            name: "Grove".to_string(),
            speed_modifier: 0.85,
            food_regen_modifier: 0.9,
            expansion_chance: 0.001,
            color: (40, 110, 60),
            max_food_sources: 5,
            producer: FoodSourceKind::FruitTree,
        },
        AreaConfig {
            kind: AreaKind::Badlands,
            id: 4,
            name: "Badlands".to_string(),
            speed_modifier: 1.2,
            food_regen_modifier: 0.5,
            expansion_chance: 0.0008,
            color: (190, 160, 90),
            max_food_sources: 6,
            producer: FoodSourceKind::CactusPads,
        },
    ]
}

/// Per-variant producer parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProducerConfig {
    pub grass_patch: ProducerParams,
    pub berry_bush: ProducerParams,
    pub fruit_tree: ProducerParams,
    pub cactus_pads: ProducerParams,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            grass_patch: default_params(FoodSourceKind::GrassPatch),
            berry_bush: default_params(FoodSourceKind::BerryBush),
            fruit_tree: default_params(FoodSourceKind::FruitTree),
            cactus_pads: default_params(FoodSourceKind::CactusPads),
        }
    }
}

impl ProducerConfig {
    #[must_use]
    pub fn get(&self, kind: FoodSourceKind) -> ProducerParams {
        match kind {
            FoodSourceKind::GrassPatch => self.grass_patch,
            FoodSourceKind::BerryBush => self.berry_bush,
            FoodSourceKind::FruitTree => self.fruit_tree,
            FoodSourceKind::CactusPads => self.cactus_pads,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (FoodSourceKind, ProducerParams)> + '_ {
        [
            FoodSourceKind::GrassPatch,
            FoodSourceKind::BerryBush,
            FoodSourceKind::FruitTree,
            FoodSourceKind::CactusPads,
        ]
        .into_iter()
        .map(|kind| (kind, self.get(kind)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default = "default_areas")]
    pub areas: Vec<AreaConfig>,
    #[serde(default)]
    pub producers: ProducerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            agent: AgentConfig::default(),
            areas: default_areas(),
            producers: ProducerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - World dimensions must be positive and reasonable (<= 4096)
    /// - The area table holds exactly one row per zone kind
    /// - Probabilities must lie in [0.0, 1.0]
    /// - Stat curves are finite and non-negative, with positive health and energy at zero points
    /// - Producer capacities, intervals and lifespans must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.width <= 4096, "World width too large (max 4096)");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= 4096,
            "World height too large (max 4096)"
        );
        anyhow::ensure!(self.world.cell_size > 0, "Cell size must be positive");
        anyhow::ensure!(
            self.world.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        anyhow::ensure!(
            self.world.initial_agents <= 10000,
            "Initial agent count too large (max 10000)"
        );
        anyhow::ensure!(
            self.world.expansion_radius > 0,
            "Expansion radius must be positive"
        );

        // Agent validation
        anyhow::ensure!(self.agent.body_points > 0, "Body points must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.agent.flee_min_intensity),
            "Flee minimum intensity must be in [0.0, 1.0]"
        );
        anyhow::ensure!(self.agent.density_cap > 0.0, "Density cap must be positive");
        for (name, curve) in self.agent.curves() {
            anyhow::ensure!(
                curve.base.is_finite() && curve.k.is_finite(),
                "{name} curve must be finite"
            );
            anyhow::ensure!(
                curve.base >= 0.0 && curve.k >= 0.0,
                "{name} curve must be non-negative"
            );
        }
        anyhow::ensure!(self.agent.hp.apply(0) > 0.0, "Health at zero points must be positive");
        anyhow::ensure!(
            self.agent.energy.apply(0) > 0.0,
            "Energy at zero points must be positive"
        );
        for (name, cost) in [
            ("Move cost base", self.agent.move_cost_base),
            ("Move cost scale", self.agent.move_cost_scale),
            ("Idle recovery", self.agent.idle_recovery),
            ("Passive upkeep", self.agent.passive_upkeep),
            ("Mate cost", self.agent.mate_cost),
            ("Attack cost", self.agent.attack_cost),
            ("Starvation damage", self.agent.starvation_damage),
        ] {
            anyhow::ensure!(cost >= 0.0, "{name} must be non-negative");
        }

        // Area validation
        for kind in AreaKind::ALL {
            let rows = self.areas.iter().filter(|a| a.kind == kind).count();
            anyhow::ensure!(rows == 1, "Area table needs exactly one {kind:?} row, found {rows}");
        }
        for area in &self.areas {
            anyhow::ensure!(
                (0.0..=1.0).contains(&area.expansion_chance),
                "Expansion chance for {} must be in [0.0, 1.0]",
                area.name
            );
            anyhow::ensure!(
                area.speed_modifier >= 0.0,
                "Speed modifier for {} must be non-negative",
                area.name
            );
            anyhow::ensure!(
                area.food_regen_modifier >= 0.0,
                "Food regen modifier for {} must be non-negative",
                area.name
            );
            anyhow::ensure!(
                self.world.initial_sources_per_area <= area.max_food_sources,
                "Initial sources per area exceeds the {} limit",
                area.name
            );
        }

        // Producer validation
        for (kind, params) in self.producers.iter() {
            let label = kind.label();
            anyhow::ensure!(params.capacity > 0.0, "Capacity of {label} must be positive");
            anyhow::ensure!(params.regen_rate >= 0.0, "Regen rate of {label} must be non-negative");
            anyhow::ensure!(params.cost >= 0.0, "Cost of {label} must be non-negative");
            anyhow::ensure!(params.lifespan > 0, "Lifespan of {label} must be positive");
            anyhow::ensure!(params.food_expiry > 0, "Food expiry of {label} must be positive");
            match params.policy {
                ProductionPolicy::Interval { every } => {
                    anyhow::ensure!(every > 0, "Interval of {label} must be positive");
                }
                ProductionPolicy::RandomDrop { chance } => {
                    anyhow::ensure!(
                        (0.0..=1.0).contains(&chance),
                        "Drop chance of {label} must be in [0.0, 1.0]"
                    );
                }
            }
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Looks up the area row for a zone kind.
    #[must_use]
    pub fn area(&self, kind: AreaKind) -> Option<&AreaConfig> {
        self.areas.iter().find(|a| a.kind == kind)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.areas).as_bytes());
        hasher.update(format!("{:?}", self.producers).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_width() {
        let config = AppConfig {
            world: WorldConfig {
                width: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_area_row() {
        let mut config = AppConfig::default();
        config.areas.retain(|a| a.kind != AreaKind::Grove);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_area_row() {
        let mut config = AppConfig::default();
        let extra = config.areas[0].clone();
        config.areas.push(extra);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_expansion_chance() {
        let mut config = AppConfig::default();
        config.areas[1].expansion_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_stat_curve_rejected() {
        let mut config = AppConfig::default();
        config.agent.energy = StatCurve::new(-100.0, 0.0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.agent.sight.k = -1.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.agent.speed.base = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_health_curve_rejected() {
        let mut config = AppConfig::default();
        config.agent.hp = StatCurve::new(0.0, 10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = AppConfig::default();
        config.producers.grass_patch.policy = ProductionPolicy::Interval { every: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let toml = r#"
            [world]
            width = 30
            height = 20
            seed = 7

            [producers.grass_patch]
            capacity = 50.0
            regen_rate = 0.2
            policy = { mode = "interval", every = 25 }
            cost = 5.0
            food_value = 10.0
            food_expiry = 100
            lifespan = 400
        "#;
        let config = AppConfig::from_toml(toml).expect("valid config");
        assert_eq!(config.world.width, 30);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.world.cell_size, 16);
        assert_eq!(
            config.producers.grass_patch.policy,
            ProductionPolicy::Interval { every: 25 }
        );
        assert_eq!(config.producers.berry_bush, default_params(FoodSourceKind::BerryBush));
        assert_eq!(config.areas.len(), 4);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(AppConfig::from_toml("[world]\nwidth = 0\n").is_err());
    }

    #[test]
    fn test_stat_curve_diminishing_returns() {
        let curve = StatCurve::new(10.0, 2.0);
        assert_eq!(curve.apply(0), 10.0);
        assert_eq!(curve.apply(4), 14.0);
        assert_eq!(curve.apply(16), 18.0);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let mut config3 = AppConfig::default();
        config3.agent.mate_cost = 9.0;
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }
}
