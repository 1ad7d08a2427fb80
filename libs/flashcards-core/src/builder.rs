//! Test assembly: random disjoint card batches fed through the generators.

use rand::{Rng, RngCore};

use crate::error::{Result, TestError};
use crate::generator::{
    fresh_id, ChoiceQuestionGenerator, ExerciseGenerator, MatchingQuestionGenerator,
    OpenQuestionGenerator,
};
use crate::types::{Card, Collection, Test, TestCounts};

/// Assembles a [`Test`] from a collection, drawing one random batch per
/// exercise without ever reusing a card within the test.
///
/// Exercises land in generation order: open first, then choice, then
/// matching. The whole build is deterministic for a seeded rng.
#[derive(Debug, Default)]
pub struct TestBuilder {
    open: OpenQuestionGenerator,
    choice: ChoiceQuestionGenerator,
    matching: MatchingQuestionGenerator,
}

impl TestBuilder {
    /// Builder with non-default choice count (K) and match count (M).
    pub fn new(choice_count: usize, match_count: usize) -> Self {
        Self {
            open: OpenQuestionGenerator,
            choice: ChoiceQuestionGenerator::new(choice_count),
            matching: MatchingQuestionGenerator::new(match_count),
        }
    }

    /// Cards the given counts will consume.
    pub fn required_cards(&self, counts: TestCounts) -> usize {
        counts.open * self.open.required_batch_size()
            + counts.choice * self.choice.required_batch_size()
            + counts.matching * self.matching.required_batch_size()
    }

    pub fn build(
        &self,
        collection: &Collection,
        counts: TestCounts,
        rng: &mut dyn RngCore,
    ) -> Result<Test> {
        let required = self.required_cards(counts);
        if collection.cards.len() < required {
            return Err(TestError::InsufficientCards {
                required,
                available: collection.cards.len(),
            });
        }

        let mut pool: Vec<Card> = collection.cards.clone();
        let mut exercises = Vec::with_capacity(counts.open + counts.choice + counts.matching);

        let passes: [(&dyn ExerciseGenerator, usize); 3] = [
            (&self.open, counts.open),
            (&self.choice, counts.choice),
            (&self.matching, counts.matching),
        ];
        for (generator, count) in passes {
            for _ in 0..count {
                let batch = draw_batch(&mut pool, generator.required_batch_size(), rng);
                exercises.push(generator.generate(&batch, rng)?);
            }
        }

        Ok(Test {
            id: fresh_id(rng),
            exercises,
        })
    }
}

/// Uniform draw without replacement; the pool shrinks by `size`.
fn draw_batch(pool: &mut Vec<Card>, size: usize, rng: &mut dyn RngCore) -> Vec<Card> {
    (0..size)
        .map(|_| pool.swap_remove(rng.gen_range(0..pool.len())))
        .collect()
}
