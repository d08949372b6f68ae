//! Domain layer - Core business logic.
//!
//! Contains the pure, I/O-free rules of the container assistant.

pub mod assistant;
