//! Core types for the self-testing engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single study unit: a term and its definition.
///
/// Immutable once created and owned by exactly one collection. Generators
/// copy `term`/`definition` into exercises instead of borrowing, so a built
/// test never aliases the source collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub term: String,
    pub definition: String,
    pub owner_id: Uuid,
    pub collection_id: Uuid,
}

/// A named, owner-scoped set of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub cards: Vec<Card>,
}

/// The learner-facing half of an exercise.
///
/// Serialized with a `kind` tag so the variant survives any transport
/// boundary alongside its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Show the definition, expect the term typed back.
    Open { definition: String },
    /// Show the definition plus a shuffled list of candidate terms.
    Choice {
        definition: String,
        choices: Vec<String>,
    },
    /// Independently shuffled terms and definitions to pair up.
    /// `group_id` ties the question to its answer even when another matching
    /// exercise in the same test reuses identical strings.
    Matching {
        terms: Vec<String>,
        definitions: Vec<String>,
        group_id: Uuid,
    },
}

/// The answer half of an exercise — stored as ground truth at generation
/// time, and submitted by the learner at grading time. Variants mirror
/// [`Question`] one-to-one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Open { term: String },
    Choice { term: String },
    Matching {
        /// definition -> term over the original card pairing.
        matches: HashMap<String, String>,
        group_id: Uuid,
    },
}

/// One generated exercise. The answer is always derived from the exact
/// cards the question was built from; the two halves are never constructed
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub question: Question,
    pub answer: Answer,
}

/// A generated test: built once, then read-only ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: Uuid,
    pub exercises: Vec<Exercise>,
}

/// How many exercises of each shape a test should contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCounts {
    pub open: usize,
    pub choice: usize,
    pub matching: usize,
}

/// A learner's answers for one test attempt, keyed by exercise id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub test_id: Uuid,
    pub answers: HashMap<Uuid, Answer>,
}

/// Verdict for a single exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseVerdict {
    pub correct: bool,
}

/// Aggregate grading result. Every exercise of the graded test appears in
/// `per_exercise`, whether or not it was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub per_exercise: HashMap<Uuid, ExerciseVerdict>,
    pub correct_count: usize,
    pub wrong_count: usize,
}
