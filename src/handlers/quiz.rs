// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, types::Json as SqlJson};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{
            AnswerResult, QuizSession, StartQuizRequest, StartQuizResponse, SubmitQuizRequest,
            SubmitQuizResponse,
        },
    },
};

const QUESTION_COLUMNS: &str =
    "id, question_text, options, correct_answer, explanation, topic, difficulty_level, created_at";

/// Starts a new quiz.
///
/// Samples `question_count` distinct questions matching the requested
/// difficulty (and topic, if given) and records the sampled id list as a
/// quiz session, so submission grades against exactly this set.
pub async fn start_quiz(
    State(pool): State<SqlitePool>,
    Json(req): Json<StartQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let available: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM questions
        WHERE difficulty_level = ? AND (? IS NULL OR topic = ?)
        "#,
    )
    .bind(req.difficulty_level)
    .bind(req.topic_filter)
    .bind(req.topic_filter)
    .fetch_one(&pool)
    .await?;

    if available < req.question_count {
        return Err(AppError::BadRequest(format!(
            "Not enough questions available. Found {}, requested {}",
            available, req.question_count
        )));
    }

    // Uniform sample without replacement.
    let sql = format!(
        r#"
        SELECT {QUESTION_COLUMNS} FROM questions
        WHERE difficulty_level = ? AND (? IS NULL OR topic = ?)
        ORDER BY RANDOM()
        LIMIT ?
        "#
    );
    let questions = sqlx::query_as::<_, Question>(&sql)
        .bind(req.difficulty_level)
        .bind(req.topic_filter)
        .bind(req.topic_filter)
        .bind(req.question_count)
        .fetch_all(&pool)
        .await?;

    let session = QuizSession {
        id: Uuid::new_v4().to_string(),
        question_ids: SqlJson(questions.iter().map(|q| q.id.clone()).collect()),
        difficulty_level: req.difficulty_level,
        topic_filter: req.topic_filter,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO quiz_sessions (id, question_ids, difficulty_level, topic_filter, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&session.id)
    .bind(&session.question_ids)
    .bind(session.difficulty_level)
    .bind(session.topic_filter)
    .bind(session.created_at)
    .execute(&pool)
    .await?;

    Ok(Json(StartQuizResponse {
        id: session.id,
        questions,
        difficulty_level: session.difficulty_level,
        topic_filter: session.topic_filter,
        created_at: session.created_at,
    }))
}

/// Grades a submission against the recorded quiz session and stores the attempt.
pub async fn submit_quiz(
    State(pool): State<SqlitePool>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.answers.is_empty() {
        return Err(AppError::BadRequest("No answers submitted".to_string()));
    }

    let session = sqlx::query_as::<_, QuizSession>(
        r#"
        SELECT id, question_ids, difficulty_level, topic_filter, created_at
        FROM quiz_sessions
        WHERE id = ?
        "#,
    )
    .bind(&req.quiz_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Quiz session not found".to_string()))?;

    // Use QueryBuilder for dynamic IN clause
    let mut query_builder = sqlx::QueryBuilder::<Sqlite>::new(format!(
        "SELECT {QUESTION_COLUMNS} FROM questions WHERE id IN ("
    ));
    let mut separated = query_builder.separated(",");
    for id in session.question_ids.iter() {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    let rows: Vec<Question> = query_builder.build_query_as().fetch_all(&pool).await?;

    if rows.is_empty() {
        return Err(AppError::NotFound("Quiz questions not found".to_string()));
    }

    // Restore the sampled order; ids reseeded away since the quiz started drop out.
    let by_id: HashMap<&str, &Question> = rows.iter().map(|q| (q.id.as_str(), q)).collect();
    let questions: Vec<&Question> = session
        .question_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect();

    let (correct_answers, results) = grade(&questions, &req.answers);
    let score = correct_answers as f64 / req.answers.len() as f64 * 100.0;

    sqlx::query(
        r#"
        INSERT INTO quiz_attempts
            (id, session_id, questions, user_answers, score, total_questions,
             correct_answers, difficulty_level, topic_filter, time_taken, completed_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&req.session_id)
    .bind(SqlJson(questions.iter().map(|q| q.id.clone()).collect::<Vec<String>>()))
    .bind(SqlJson(&req.answers))
    .bind(score)
    .bind(req.answers.len() as i64)
    .bind(correct_answers)
    .bind(session.difficulty_level)
    .bind(session.topic_filter)
    .bind(req.time_taken)
    .bind(Utc::now())
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert quiz attempt: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(SubmitQuizResponse {
        score,
        correct_answers,
        total_questions: req.answers.len() as i64,
        results,
        time_taken: req.time_taken,
    }))
}

/// Position-wise comparison of submitted answers against the question set.
/// Extra answers beyond the question list are ignored, as are extra questions
/// beyond the answer list.
fn grade(questions: &[&Question], answers: &[i64]) -> (i64, Vec<AnswerResult>) {
    let mut correct_answers = 0;
    let mut results = Vec::with_capacity(questions.len().min(answers.len()));

    for (question, &user_answer) in questions.iter().zip(answers) {
        let is_correct = user_answer == question.correct_answer;
        if is_correct {
            correct_answers += 1;
        }

        results.push(AnswerResult {
            question: question.question_text.clone(),
            options: question.options.0.clone(),
            user_answer,
            correct_answer: question.correct_answer,
            is_correct,
            explanation: question.explanation.clone(),
        });
    }

    (correct_answers, results)
}
