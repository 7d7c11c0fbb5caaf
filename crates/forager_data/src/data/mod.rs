//! Core data structures for the Forager simulation.

pub mod entity;
pub mod environment;
pub mod food;
pub mod policy;
