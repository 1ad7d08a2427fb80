//! Open recall: show the definition, expect the exact term back.

use rand::RngCore;

use super::{check_batch, fresh_id, ExerciseGenerator};
use crate::error::Result;
use crate::types::{Answer, Card, Exercise, Question};

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenQuestionGenerator;

impl ExerciseGenerator for OpenQuestionGenerator {
    fn required_batch_size(&self) -> usize {
        1
    }

    fn generate(&self, cards: &[Card], rng: &mut dyn RngCore) -> Result<Exercise> {
        check_batch(cards, self.required_batch_size())?;
        let card = &cards[0];

        Ok(Exercise {
            id: fresh_id(rng),
            question: Question::Open {
                definition: card.definition.clone(),
            },
            answer: Answer::Open {
                term: card.term.clone(),
            },
        })
    }
}
