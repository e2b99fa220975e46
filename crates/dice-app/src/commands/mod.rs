//! CLI Commands

pub mod roll;

pub use roll::RollCommand;
