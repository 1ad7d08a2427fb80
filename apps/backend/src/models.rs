//! API request/response types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flashcards_core::{Answer, Exercise, Question, TestCounts};

use crate::store::CollectionRecord;

// === Auth ===

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub token: String,
}

// === Collections ===

#[derive(Debug, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    pub id: Uuid,
    pub name: String,
    pub card_count: usize,
    pub created_at: DateTime<Utc>,
}

impl CollectionSummary {
    pub fn from_record(record: CollectionRecord, card_count: usize) -> Self {
        Self {
            id: record.id,
            name: record.name,
            card_count,
            created_at: record.created_at,
        }
    }
}

// === Cards ===

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub collection_id: Uuid,
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Deserialize)]
pub struct CardListQuery {
    pub collection_id: Option<Uuid>,
}

// === Tests ===

#[derive(Debug, Deserialize)]
pub struct GenerateTestRequest {
    pub collection_id: Uuid,
    #[serde(default)]
    pub open: usize,
    #[serde(default)]
    pub choice: usize,
    #[serde(default)]
    pub matching: usize,
}

impl GenerateTestRequest {
    pub fn counts(&self) -> TestCounts {
        TestCounts {
            open: self.open,
            choice: self.choice,
            matching: self.matching,
        }
    }
}

/// The learner-facing half of a generated exercise. Answers stay on the
/// server as ground truth and are never part of this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseQuestion {
    pub id: Uuid,
    pub question: Question,
}

impl ExerciseQuestion {
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            question: exercise.question.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateTestResponse {
    pub test_id: Uuid,
    pub exercises: Vec<ExerciseQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct CheckTestRequest {
    pub test_id: Uuid,
    pub answers: HashMap<Uuid, Answer>,
}
