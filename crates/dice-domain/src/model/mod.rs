//! Domain Models - The vocabulary of the dice roller
//!
//! Every name here should match how we talk about the system:
//! a roll produces a result, the coordinator holds the state.

pub mod roll_result;
pub mod roll_state;
