//! Presentation Adapters - Turning a RollState into something to look at
//!
//! `DieFacePresenter` is a `RollObserver`: subscribe it to a coordinator
//! and it re-renders on every roll.

pub mod die_face;
pub mod report;
