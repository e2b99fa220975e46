//! Port Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from the outside world,
//! but NOT how it's provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RollEngine      │  ThreadRngRollEngine
//!   fn roll()           │  SeededRollEngine
//! ```

pub mod roll_engine;
