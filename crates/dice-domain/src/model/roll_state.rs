//! RollState - What the screen is currently showing
//!
//! The state is replaced wholesale on every roll, never edited in place.
//! `generation` counts the rolls that led here, so two consecutive
//! rolls of the same face are still two distinct states.

use super::roll_result::RollResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollState {
    result: RollResult,
    generation: u64,
}

impl RollState {
    /// State before any roll has been requested
    pub fn initial(result: RollResult) -> Self {
        Self {
            result,
            generation: 0,
        }
    }

    /// The state that follows this one after rolling `result`
    ///
    /// The generation saturates at `u64::MAX` and never returns to 0.
    pub fn advance(self, result: RollResult) -> Self {
        Self {
            result,
            generation: self.generation.saturating_add(1),
        }
    }

    // ========== Getters ==========

    pub fn result(&self) -> RollResult {
        self.result
    }

    pub fn value(&self) -> u8 {
        self.result.value()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True until the first roll
    pub fn is_initial(&self) -> bool {
        self.generation == 0
    }
}

impl Default for RollState {
    fn default() -> Self {
        Self::initial(RollResult::default())
    }
}
