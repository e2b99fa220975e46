//! Roll Engine - Abstract source of dice rolls
//!
//! The domain only knows that asking for a roll yields a face.
//! Where the entropy comes from is not our concern here.

use std::sync::Arc;

use crate::model::roll_result::RollResult;

/// Roll Engine Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must draw uniformly from [1, 6] and keep no
/// memory of earlier rolls.
///
/// Note: `roll` cannot fail. Running out of entropy is fatal for
/// the whole process, not something a caller can recover from.
pub trait RollEngine: Send + Sync {
    /// Roll the die once
    fn roll(&self) -> RollResult;
}

impl<T: RollEngine + ?Sized> RollEngine for &T {
    fn roll(&self) -> RollResult {
        (**self).roll()
    }
}

impl<T: RollEngine + ?Sized> RollEngine for Box<T> {
    fn roll(&self) -> RollResult {
        (**self).roll()
    }
}

impl<T: RollEngine + ?Sized> RollEngine for Arc<T> {
    fn roll(&self) -> RollResult {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Cycles through the faces, for testing
    struct CyclingEngine {
        next: AtomicUsize,
    }

    impl CyclingEngine {
        fn new() -> Self {
            Self {
                next: AtomicUsize::new(0),
            }
        }
    }

    impl RollEngine for CyclingEngine {
        fn roll(&self) -> RollResult {
            let index = self.next.fetch_add(1, Ordering::Relaxed) % RollResult::FACES;
            RollResult::new(index as u8 + RollResult::MIN).unwrap()
        }
    }

    #[test]
    fn test_engine_by_reference() {
        let engine = CyclingEngine::new();
        let by_ref: &dyn RollEngine = &engine;

        assert_eq!(by_ref.roll().value(), 1);
        assert_eq!((&by_ref).roll().value(), 2);
    }

    #[test]
    fn test_engine_boxed_and_shared() {
        let boxed: Box<dyn RollEngine> = Box::new(CyclingEngine::new());
        assert_eq!(boxed.roll().value(), 1);

        let shared: Arc<dyn RollEngine> = Arc::new(CyclingEngine::new());
        let clone = Arc::clone(&shared);
        assert_eq!(shared.roll().value(), 1);
        assert_eq!(clone.roll().value(), 2);
    }
}
