//! Matching: pair up M shuffled terms with M shuffled definitions.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::{check_batch, fresh_id, ExerciseGenerator};
use crate::error::Result;
use crate::types::{Answer, Card, Exercise, Question};

pub const DEFAULT_MATCH_COUNT: usize = 3;

/// Shuffles terms and definitions independently for display; the stored
/// mapping is always the original card pairing. A fresh `group_id` on both
/// halves keeps grading unambiguous when two matching exercises in one test
/// happen to share strings.
#[derive(Debug, Clone, Copy)]
pub struct MatchingQuestionGenerator {
    matches: usize,
}

impl MatchingQuestionGenerator {
    pub fn new(matches: usize) -> Self {
        Self { matches }
    }
}

impl Default for MatchingQuestionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_COUNT)
    }
}

impl ExerciseGenerator for MatchingQuestionGenerator {
    fn required_batch_size(&self) -> usize {
        self.matches
    }

    fn generate(&self, cards: &[Card], rng: &mut dyn RngCore) -> Result<Exercise> {
        check_batch(cards, self.matches)?;

        let mut terms: Vec<String> = cards.iter().map(|c| c.term.clone()).collect();
        let mut definitions: Vec<String> = cards.iter().map(|c| c.definition.clone()).collect();
        terms.shuffle(rng);
        definitions.shuffle(rng);

        let matches = cards
            .iter()
            .map(|c| (c.definition.clone(), c.term.clone()))
            .collect();

        let group_id = fresh_id(rng);
        Ok(Exercise {
            id: fresh_id(rng),
            question: Question::Matching {
                terms,
                definitions,
                group_id,
            },
            answer: Answer::Matching { matches, group_id },
        })
    }
}
