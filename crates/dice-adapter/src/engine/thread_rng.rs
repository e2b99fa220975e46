//! Thread-local random roll engine.
//!
//! Implements `RollEngine` using `rand::thread_rng()`.

use dice_domain::{RollEngine, RollResult};
use rand::Rng;

/// Production roll engine using the thread-local RNG.
///
/// Stateless: every call borrows the calling thread's generator, so
/// consecutive rolls share nothing through this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRollEngine;

impl ThreadRngRollEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RollEngine for ThreadRngRollEngine {
    fn roll(&self) -> RollResult {
        let face = rand::thread_rng().gen_range(RollResult::MIN..=RollResult::MAX);
        RollResult::new(face).expect("gen_range(MIN..=MAX) yields a face in range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_bounds() {
        let engine = ThreadRngRollEngine::new();
        for _ in 0..1_000 {
            let value = engine.roll().value();
            assert!((1..=6).contains(&value), "Value {} out of range", value);
        }
    }

    #[test]
    fn test_every_face_reachable() {
        let engine = ThreadRngRollEngine::new();
        let mut seen = [false; 6];

        for _ in 0..2_000 {
            seen[(engine.roll().value() - 1) as usize] = true;
        }

        assert_eq!(seen, [true; 6]);
    }

    #[test]
    fn test_roll_distribution_is_roughly_uniform() {
        let engine = ThreadRngRollEngine::new();
        let mut counts = [0usize; 6];

        for _ in 0..10_000 {
            counts[(engine.roll().value() - 1) as usize] += 1;
        }

        // Expected 1667 per face, standard deviation ~37
        for (face, count) in counts.iter().enumerate() {
            assert!(
                (1_400..=1_950).contains(count),
                "Face {} rolled {} times",
                face + 1,
                count
            );
        }
    }
}
