// src/handlers/progress.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    handlers::round1,
    models::attempt::{ProgressSummary, QuizAttempt, RecentScore},
};

/// Per-session progress: every attempt for the session folded into summary
/// statistics. A session with no attempts gets the zeroed default.
pub async fn get_progress(
    State(pool): State<SqlitePool>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = sqlx::query_as::<_, QuizAttempt>(
        r#"
        SELECT id, session_id, questions, user_answers, score, total_questions,
               correct_answers, difficulty_level, topic_filter, time_taken, completed_at
        FROM quiz_attempts
        WHERE session_id = ?
        "#,
    )
    .bind(&session_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(summarize(&session_id, &attempts)))
}

/// Folds a session's attempts into a summary.
pub fn summarize(session_id: &str, attempts: &[QuizAttempt]) -> ProgressSummary {
    if attempts.is_empty() {
        return ProgressSummary {
            session_id: session_id.to_string(),
            total_quizzes: 0,
            average_score: 0.0,
            topics_attempted: HashMap::new(),
            difficulty_progress: HashMap::new(),
            recent_scores: Vec::new(),
        };
    }

    let total_score: f64 = attempts.iter().map(|a| a.score).sum();
    let average_score = round1(total_score / attempts.len() as f64);

    let mut topics_attempted: HashMap<String, i64> = HashMap::new();
    let mut difficulty_progress: HashMap<String, i64> = HashMap::new();
    let mut recent_scores = Vec::with_capacity(attempts.len());

    for attempt in attempts {
        // Attempts without a topic filter count under "general".
        let topic = attempt.topic_filter.map_or("general", |t| t.as_str());
        *topics_attempted.entry(topic.to_string()).or_insert(0) += 1;

        *difficulty_progress
            .entry(attempt.difficulty_level.as_str().to_string())
            .or_insert(0) += 1;

        recent_scores.push(RecentScore {
            score: attempt.score,
            date: attempt.completed_at,
            difficulty: attempt.difficulty_level,
        });
    }

    recent_scores.sort_by(|a, b| b.date.cmp(&a.date));
    recent_scores.truncate(10);

    ProgressSummary {
        session_id: session_id.to_string(),
        total_quizzes: attempts.len() as i64,
        average_score,
        topics_attempted,
        difficulty_progress,
        recent_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{DifficultyLevel, Topic};
    use chrono::{Duration, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn attempt(
        score: f64,
        difficulty_level: DifficultyLevel,
        topic_filter: Option<Topic>,
        age_minutes: i64,
    ) -> QuizAttempt {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            session_id: "player-1".to_string(),
            questions: Json(Vec::new()),
            user_answers: Json(Vec::new()),
            score,
            total_questions: 5,
            correct_answers: 3,
            difficulty_level,
            topic_filter,
            time_taken: 60,
            completed_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn empty_session_gets_zeroed_summary() {
        let summary = summarize("nobody", &[]);

        assert_eq!(summary.session_id, "nobody");
        assert_eq!(summary.total_quizzes, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.topics_attempted.is_empty());
        assert!(summary.difficulty_progress.is_empty());
        assert!(summary.recent_scores.is_empty());
    }

    #[test]
    fn averages_and_counts_attempts() {
        let attempts = vec![
            attempt(80.0, DifficultyLevel::Beginner, Some(Topic::Switching), 3),
            attempt(60.0, DifficultyLevel::Beginner, None, 2),
            attempt(100.0, DifficultyLevel::Advanced, Some(Topic::Switching), 1),
        ];

        let summary = summarize("player-1", &attempts);

        assert_eq!(summary.total_quizzes, 3);
        assert_eq!(summary.average_score, 80.0);
        assert_eq!(summary.topics_attempted["switching"], 2);
        assert_eq!(summary.topics_attempted["general"], 1);
        assert_eq!(summary.difficulty_progress["beginner"], 2);
        assert_eq!(summary.difficulty_progress["advanced"], 1);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let attempts = vec![
            attempt(66.66666666666667, DifficultyLevel::Beginner, None, 2),
            attempt(33.33333333333333, DifficultyLevel::Beginner, None, 1),
        ];

        let summary = summarize("player-1", &attempts);

        assert_eq!(summary.average_score, 50.0);

        let attempts = vec![
            attempt(60.0, DifficultyLevel::Beginner, None, 2),
            attempt(66.66666666666667, DifficultyLevel::Beginner, None, 1),
        ];

        let summary = summarize("player-1", &attempts);

        assert_eq!(summary.average_score, 63.3);
    }

    #[test]
    fn recent_scores_are_newest_first_and_capped_at_ten() {
        let attempts: Vec<QuizAttempt> = (0..12)
            .map(|i| attempt(i as f64 * 5.0, DifficultyLevel::Beginner, None, i))
            .collect();

        let summary = summarize("player-1", &attempts);

        assert_eq!(summary.recent_scores.len(), 10);
        // age_minutes = 0 is the most recent attempt.
        assert_eq!(summary.recent_scores[0].score, 0.0);
        for window in summary.recent_scores.windows(2) {
            assert!(window[0].date >= window[1].date);
        }
    }
}
