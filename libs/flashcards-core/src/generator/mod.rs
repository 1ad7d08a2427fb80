//! Exercise generators — one implementation per question shape.

pub mod choice;
pub mod matching;
pub mod open;

pub use choice::ChoiceQuestionGenerator;
pub use matching::MatchingQuestionGenerator;
pub use open::OpenQuestionGenerator;

use rand::RngCore;
use uuid::Uuid;

use crate::error::{Result, TestError};
use crate::types::{Card, Exercise};

/// Trait for turning a fixed-size batch of cards into one exercise.
pub trait ExerciseGenerator: Send + Sync {
    /// Number of cards one exercise consumes.
    fn required_batch_size(&self) -> usize;

    /// Build a single exercise from exactly `required_batch_size()` cards.
    ///
    /// The caller owns `rng`; passing a seeded generator makes the exercise
    /// reproducible.
    fn generate(&self, cards: &[Card], rng: &mut dyn RngCore) -> Result<Exercise>;
}

pub(crate) fn check_batch(cards: &[Card], expected: usize) -> Result<()> {
    if cards.len() != expected {
        return Err(TestError::InvalidBatchSize {
            expected,
            actual: cards.len(),
        });
    }
    Ok(())
}

/// Fresh v4 id drawn from the caller's rng, so seeded runs reproduce ids too.
pub(crate) fn fresh_id(rng: &mut dyn RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
