// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use sqlx::{SqlitePool, types::Json as SqlJson};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppError, models::question::Question, seed};

/// Replaces the question store with the fixed sample set.
///
/// Destructive: clears all existing questions first. Delete and reinsert run
/// in one transaction, so a failed reseed cannot leave the store half-empty.
pub async fn seed_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let samples = seed::sample_questions();

    for sample in &samples {
        if let Err(validation_errors) = sample.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;

    for sample in &samples {
        sqlx::query(
            r#"
            INSERT INTO questions
                (id, question_text, options, correct_answer, explanation, topic, difficulty_level, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&sample.question_text)
        .bind(SqlJson(&sample.options))
        .bind(sample.correct_answer)
        .bind(&sample.explanation)
        .bind(sample.topic)
        .bind(sample.difficulty_level)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!("Seeded {} questions", samples.len());

    Ok(Json(serde_json::json!({
        "message": format!("Successfully seeded {} questions", samples.len()),
    })))
}

/// Lists all questions, unfiltered.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_text, options, correct_answer, explanation, topic, difficulty_level, created_at
        FROM questions
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}
