//! Forager: a zoned foraging simulation.
//!
//! [`model::world::World`] holds the state and advances it one tick at a time;
//! [`model::clock::SimulationClock`] drives a world on a background tokio task
//! and serves lock-scoped reads.

pub mod model;
