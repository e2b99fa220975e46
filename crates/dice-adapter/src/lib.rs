//! # Dice Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `engine/` - Outbound adapters: `RollEngine` backed by `rand`
//! - `presenter/` - Inbound/presentation adapters: rendering and JSON reports

pub mod engine;
pub mod presenter;

pub use engine::{seeded::SeededRollEngine, thread_rng::ThreadRngRollEngine};
pub use presenter::{
    die_face::{DieFacePresenter, FaceStyle},
    report::{JsonReportPresenter, RollReport},
};
