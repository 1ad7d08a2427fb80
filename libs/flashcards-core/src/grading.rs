//! Grading: reconcile a submission against stored ground truth.

use std::collections::HashMap;

use crate::error::{Result, TestError};
use crate::types::{Answer, ExerciseVerdict, Submission, Test, Verdict};

/// Grade `submission` against the originally generated `test`.
///
/// Every exercise of the test gets a verdict. An exercise missing from the
/// submission counts as wrong; so does a submitted answer of a different
/// kind than the stored one. Comparison is exact and case-sensitive.
pub fn grade(test: &Test, submission: &Submission) -> Result<Verdict> {
    if submission.test_id != test.id {
        return Err(TestError::TestMismatch {
            expected: test.id,
            submitted: submission.test_id,
        });
    }

    let mut per_exercise = HashMap::with_capacity(test.exercises.len());
    let mut correct_count = 0;

    for exercise in &test.exercises {
        let correct = submission
            .answers
            .get(&exercise.id)
            .is_some_and(|submitted| answers_match(&exercise.answer, submitted));
        if correct {
            correct_count += 1;
        }
        per_exercise.insert(exercise.id, ExerciseVerdict { correct });
    }

    Ok(Verdict {
        per_exercise,
        correct_count,
        wrong_count: test.exercises.len() - correct_count,
    })
}

fn answers_match(stored: &Answer, submitted: &Answer) -> bool {
    match (stored, submitted) {
        (Answer::Open { term: stored }, Answer::Open { term: submitted }) => stored == submitted,
        (Answer::Choice { term: stored }, Answer::Choice { term: submitted }) => {
            stored == submitted
        }
        (
            Answer::Matching {
                matches: stored,
                group_id: stored_group,
            },
            Answer::Matching {
                matches: submitted,
                group_id: submitted_group,
            },
        ) => {
            // A matching exercise is one right/wrong unit: the whole mapping
            // must agree, and the group id must tie back to this exercise.
            stored_group == submitted_group && stored == submitted
        }
        _ => false,
    }
}
