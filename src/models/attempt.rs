// src/models/attempt.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

use crate::models::question::{DifficultyLevel, Topic};

/// Represents the 'quiz_attempts' table in the database.
/// One row per completed, scored submission; never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: String,

    /// Opaque client-chosen identifier correlating attempts to one user.
    pub session_id: String,

    /// Ids of the questions that were graded, in presentation order.
    pub questions: Json<Vec<String>>,

    pub user_answers: Json<Vec<i64>>,

    /// 0-100.
    pub score: f64,

    pub total_questions: i64,

    pub correct_answers: i64,

    pub difficulty_level: DifficultyLevel,

    pub topic_filter: Option<Topic>,

    /// Seconds.
    pub time_taken: i64,

    pub completed_at: DateTime<Utc>,
}

/// Aggregated per-session statistics.
#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    pub session_id: String,
    pub total_quizzes: i64,
    pub average_score: f64,
    pub topics_attempted: HashMap<String, i64>,
    pub difficulty_progress: HashMap<String, i64>,
    pub recent_scores: Vec<RecentScore>,
}

#[derive(Debug, Serialize)]
pub struct RecentScore {
    pub score: f64,
    pub date: DateTime<Utc>,
    pub difficulty: DifficultyLevel,
}

/// One leaderboard row: a qualifying session and its aggregate scores.
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub session_id: String,
    pub average_score: f64,
    pub total_quizzes: i64,
    pub best_score: f64,
    pub last_activity: DateTime<Utc>,
    pub rank: i64,
}
