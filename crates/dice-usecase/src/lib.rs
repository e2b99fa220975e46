//! # Dice Use Case Layer
//!
//! Application-specific business rules.
//! The [`RollCoordinator`] holds what the screen shows and turns a
//! "roll" request into a call on the injected [`RollEngine`].
//!
//! [`RollEngine`]: dice_domain::RollEngine

pub use dice_domain;

pub mod coordinator;
pub mod observer;

pub use coordinator::RollCoordinator;
pub use observer::{RollObserver, Subscription};
