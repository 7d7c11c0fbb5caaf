//! # Forager Core
//!
//! Simulation logic for Forager, a small foraging ecosystem: food producers
//! spread across four zones while agents wander, sense and act on a fixed
//! linear policy.
//!
//! The records themselves live in `forager_data`; this crate adds behavior
//! through extension traits ([`AreaLogic`], [`ProducerLogic`], [`PolicyLogic`])
//! and per-agent systems run in the order perception, decision, action,
//! biology.
//!
//! ## Example
//!
//! ```
//! use forager_core::brain::{PolicyLogic, POLICY_INPUTS};
//! use forager_data::Policy;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let policy = Policy::new_random_with_rng(&mut rng);
//!
//! let decision = policy.decide(&[0.5; POLICY_INPUTS]).unwrap();
//! assert!((-1.0..=1.0).contains(&decision.turn));
//! ```

/// Zone lookup and the per-zone producer counters
pub mod area;
/// Fixed linear decision policy
pub mod brain;
/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Producer lifecycle: regeneration, production, destruction
pub mod food;
/// Agent creation and body-stat derivation
pub mod lifecycle;
/// Run metrics collection and logging setup
pub mod metrics;
/// Owned world views for renderers and exports
pub mod snapshot;
/// Per-agent systems (Perception, Action, Biological)
pub mod systems;

pub use area::{zone_at, AreaLogic, AreaTable};
pub use brain::{Decision, PolicyLogic};
pub use error::{Result, SimError};
pub use food::ProducerLogic;
pub use metrics::{init_logging, Metrics};
pub use snapshot::WorldSnapshot;
