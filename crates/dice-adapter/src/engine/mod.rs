//! Roll Engine Adapters - RollEngine implementations
//!
//! These implement the `RollEngine` port from dice-domain.

pub mod seeded;
pub mod thread_rng;
