//! Multiple choice: one definition, K candidate terms, one correct.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::{check_batch, fresh_id, ExerciseGenerator};
use crate::error::Result;
use crate::types::{Answer, Card, Exercise, Question};

pub const DEFAULT_CHOICE_COUNT: usize = 4;

/// Picks one card of the batch as the target; every batch card's term
/// becomes a choice (the rest act as distractors).
#[derive(Debug, Clone, Copy)]
pub struct ChoiceQuestionGenerator {
    choices: usize,
}

impl ChoiceQuestionGenerator {
    pub fn new(choices: usize) -> Self {
        Self { choices }
    }
}

impl Default for ChoiceQuestionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CHOICE_COUNT)
    }
}

impl ExerciseGenerator for ChoiceQuestionGenerator {
    fn required_batch_size(&self) -> usize {
        self.choices
    }

    fn generate(&self, cards: &[Card], rng: &mut dyn RngCore) -> Result<Exercise> {
        check_batch(cards, self.choices)?;

        let target = &cards[rng.gen_range(0..cards.len())];
        let mut choices: Vec<String> = cards.iter().map(|c| c.term.clone()).collect();
        choices.shuffle(rng);

        Ok(Exercise {
            id: fresh_id(rng),
            question: Question::Choice {
                definition: target.definition.clone(),
                choices,
            },
            answer: Answer::Choice {
                term: target.term.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TestError;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn batch(pairs: &[(&str, &str)]) -> Vec<Card> {
        let collection_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        pairs
            .iter()
            .map(|(term, definition)| Card {
                id: Uuid::new_v4(),
                term: term.to_string(),
                definition: definition.to_string(),
                owner_id,
                collection_id,
            })
            .collect()
    }

    #[test]
    fn choices_contain_every_term_with_correct_one_exactly_once() {
        let cards = batch(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        let generator = ChoiceQuestionGenerator::default();

        for seed in [1, 42, 999, 7] {
            let mut rng = StdRng::seed_from_u64(seed);
            let exercise = generator.generate(&cards, &mut rng).unwrap();

            let (choices, definition) = match &exercise.question {
                Question::Choice {
                    choices,
                    definition,
                } => (choices, definition),
                other => panic!("expected choice question, got {other:?}"),
            };
            let correct = match &exercise.answer {
                Answer::Choice { term } => term,
                other => panic!("expected choice answer, got {other:?}"),
            };

            assert_eq!(choices.len(), 4);
            let mut sorted = choices.clone();
            sorted.sort();
            assert_eq!(sorted, vec!["a", "b", "c", "d"]);
            assert_eq!(choices.iter().filter(|c| *c == correct).count(), 1);

            // The answer term belongs to the card whose definition was asked.
            let target = cards.iter().find(|c| &c.definition == definition).unwrap();
            assert_eq!(&target.term, correct);
        }
    }

    #[test]
    fn supports_non_default_choice_count() {
        let cards = batch(&[("a", "1"), ("b", "2")]);
        let generator = ChoiceQuestionGenerator::new(2);
        let mut rng = StdRng::seed_from_u64(3);

        let exercise = generator.generate(&cards, &mut rng).unwrap();
        match exercise.question {
            Question::Choice { choices, .. } => assert_eq!(choices.len(), 2),
            other => panic!("expected choice question, got {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_batch_size() {
        let cards = batch(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let generator = ChoiceQuestionGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            generator.generate(&cards, &mut rng),
            Err(TestError::InvalidBatchSize {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn same_seed_reproduces_the_exercise() {
        let cards = batch(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        let generator = ChoiceQuestionGenerator::default();

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            generator.generate(&cards, &mut first).unwrap(),
            generator.generate(&cards, &mut second).unwrap()
        );
    }
}
