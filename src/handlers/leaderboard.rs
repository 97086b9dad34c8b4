// src/handlers/leaderboard.rs

use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    handlers::round1,
    models::attempt::{LeaderboardEntry, QuizAttempt},
};

/// Sessions with fewer attempts than this never qualify.
const MIN_ATTEMPTS: usize = 3;

const MAX_ENTRIES: usize = 10;

/// Top performers across all sessions.
pub async fn get_leaderboard(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = sqlx::query_as::<_, QuizAttempt>(
        r#"
        SELECT id, session_id, questions, user_answers, score, total_questions,
               correct_answers, difficulty_level, topic_filter, time_taken, completed_at
        FROM quiz_attempts
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(rank(&attempts)))
}

/// Groups attempts by session and ranks qualifying sessions by average score.
/// Ties break on ascending session id so the order is deterministic.
pub fn rank(attempts: &[QuizAttempt]) -> Vec<LeaderboardEntry> {
    let mut by_session: HashMap<&str, Vec<&QuizAttempt>> = HashMap::new();
    for attempt in attempts {
        by_session
            .entry(attempt.session_id.as_str())
            .or_default()
            .push(attempt);
    }

    let mut entries: Vec<LeaderboardEntry> = by_session
        .into_iter()
        .filter(|(_, group)| group.len() >= MIN_ATTEMPTS)
        .map(|(session_id, group)| {
            let mut total_score = 0.0;
            let mut best_score = 0.0_f64;
            let mut last_activity = group[0].completed_at;

            for attempt in &group {
                total_score += attempt.score;
                best_score = best_score.max(attempt.score);
                if attempt.completed_at > last_activity {
                    last_activity = attempt.completed_at;
                }
            }

            LeaderboardEntry {
                session_id: session_id.to_string(),
                average_score: total_score / group.len() as f64,
                total_quizzes: group.len() as i64,
                best_score,
                last_activity,
                rank: 0,
            }
        })
        .collect();

    // Sort on the exact average; round only for display.
    entries.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.session_id.cmp(&b.session_id))
    });
    entries.truncate(MAX_ENTRIES);

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as i64;
        entry.average_score = round1(entry.average_score);
    }

    entries
}
