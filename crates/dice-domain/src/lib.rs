//! # Dice Domain Layer
//!
//! The heart of the dice roller - pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/ - Value Objects (RollResult, RollState)             ││
//! │  │  port/  - Trait definitions (RollEngine, not implementations)││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If we switch from `thread_rng` to a hardware RNG, this crate doesn't change.
//! If the screen becomes a web page, this crate doesn't change.

pub mod model;
pub mod port;

// Re-export commonly used types
pub use model::{
    roll_result::{RollError, RollResult},
    roll_state::RollState,
};

pub use port::roll_engine::RollEngine;
