use super::policy::Policy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position of an agent, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Unique identification of an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
}

/// Body stat categories that share the point pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Energy,
    Speed,
    Attack,
    Lifespan,
    Sight,
    Agility,
}

impl Stat {
    pub const COUNT: usize = 7;
    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Hp,
        Stat::Energy,
        Stat::Speed,
        Stat::Attack,
        Stat::Lifespan,
        Stat::Sight,
        Stat::Agility,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Raw point allocation across the seven stat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BodyPoints(pub [u32; Stat::COUNT]);

impl BodyPoints {
    #[must_use]
    pub fn get(&self, stat: Stat) -> u32 {
        self.0[stat.index()]
    }

    pub fn add(&mut self, stat: Stat, points: u32) {
        self.0[stat.index()] += points;
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Stats derived from body points with diminishing returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyStats {
    /// Health ceiling.
    pub max_hp: f64,
    /// Energy ceiling.
    pub max_energy: f64,
    /// Cells travelled per tick at neutral effort.
    pub base_speed: f64,
    /// Damage an attack would deal.
    pub attack_power: f64,
    /// Age (ticks) at which the agent dies of old age.
    pub max_age: u64,
    /// Perception radius in cells.
    pub sight: f64,
    /// Maximum heading change per tick, in degrees.
    pub agility: f64,
}

/// Mutable condition of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub hp: f64,
    pub energy: f64,
    pub age: u64,
}

/// The closed set of behaviours an agent can choose each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    Move,
    #[default]
    Idle,
    Flee,
    Mate,
    Attack,
}

impl Action {
    pub const COUNT: usize = 5;
    pub const ALL: [Action; Action::COUNT] = [
        Action::Move,
        Action::Idle,
        Action::Flee,
        Action::Mate,
        Action::Attack,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Idle => "idle",
            Action::Flee => "flee",
            Action::Mate => "mate",
            Action::Attack => "attack",
        }
    }
}

/// Cached result of the last nearest-agent search.
///
/// Holds the target's id and where it stood when sensed; the target itself
/// may since have moved or left the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensedTarget {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
}

/// A complete foraging agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(flatten)]
    pub identity: Identity,
    pub position: Position,
    /// Facing in degrees, `[0, 360)`, 0 pointing east.
    pub heading: f64,
    pub points: BodyPoints,
    pub stats: BodyStats,
    pub vitals: Vitals,
    pub policy: Policy,
    pub last_action: Action,
    pub last_target: Option<SensedTarget>,
}

impl Agent {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.vitals.hp > 0.0
    }
}
