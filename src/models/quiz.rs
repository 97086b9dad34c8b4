// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

use crate::models::question::{DifficultyLevel, Question, Topic};

/// Represents the 'quiz_sessions' table in the database.
/// Records the exact question set sampled at quiz start, so submission is
/// graded against what the client was actually shown.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: String,

    /// Sampled question ids, in presentation order.
    pub question_ids: Json<Vec<String>>,

    pub difficulty_level: DifficultyLevel,

    pub topic_filter: Option<Topic>,

    pub created_at: DateTime<Utc>,
}

/// DTO for starting a quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct StartQuizRequest {
    pub difficulty_level: DifficultyLevel,
    pub topic_filter: Option<Topic>,
    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, message = "question_count must be at least 1"))]
    pub question_count: i64,
}

fn default_question_count() -> i64 {
    10
}

/// DTO returned by quiz start: the fresh session with full questions embedded.
/// The answer key travels with the questions.
#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub id: String,
    pub questions: Vec<Question>,
    pub difficulty_level: DifficultyLevel,
    pub topic_filter: Option<Topic>,
    pub created_at: DateTime<Utc>,
}

/// DTO for submitting a completed quiz.
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub session_id: String,
    pub quiz_id: String,

    /// User's chosen option index per question, in presentation order.
    pub answers: Vec<i64>,

    /// Elapsed time in seconds.
    pub time_taken: i64,
}

/// Per-question grading row returned to the client.
#[derive(Debug, Serialize)]
pub struct AnswerResult {
    pub question: String,
    pub options: Vec<String>,
    pub user_answer: i64,
    pub correct_answer: i64,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub score: f64,
    pub correct_answers: i64,
    pub total_questions: i64,
    pub results: Vec<AnswerResult>,
    pub time_taken: i64,
}
