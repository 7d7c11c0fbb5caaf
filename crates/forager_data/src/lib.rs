//! Plain data records shared by the Forager simulation crates.
//!
//! Everything here is a passive value type. Behavior lives in `forager_core`
//! as extension traits over these records.

pub mod data;

pub use data::entity::{
    Action, Agent, BodyPoints, BodyStats, Identity, Position, SensedTarget, Stat, Vitals,
};
pub use data::environment::{Area, AreaKind};
pub use data::food::{Food, FoodSource, FoodSourceKind, ProducerParams, ProductionPolicy};
pub use data::policy::Policy;
