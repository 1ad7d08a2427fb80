//! Core self-testing engine for flashcard collections.
//!
//! Provides:
//! - Exercise generators for the three question shapes (open recall,
//!   multiple choice, matching)
//! - Test builder: disjoint random card batches -> ordered exercise list
//! - Grading: submitted answers reconciled against stored ground truth
//! - Shared types (Card, Collection, Question, Answer, Test, Verdict)
//!
//! The engine is a pure, synchronous computation over in-memory values.
//! Callers thread their own randomness source into generation, so a seeded
//! [`rand::rngs::StdRng`] reproduces a test exactly.

pub mod builder;
pub mod error;
pub mod generator;
pub mod grading;
pub mod types;

pub use builder::TestBuilder;
pub use error::{Result, TestError};
pub use generator::{
    ChoiceQuestionGenerator, ExerciseGenerator, MatchingQuestionGenerator, OpenQuestionGenerator,
};
pub use grading::grade;
pub use types::{
    Answer, Card, Collection, Exercise, ExerciseVerdict, Question, Submission, Test, TestCounts,
    Verdict,
};
