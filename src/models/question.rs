// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// Networking subject area a question belongs to.
/// Closed enum stored as TEXT, so invalid values never enter the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Topic {
    OsiModel,
    Subnetting,
    RoutingProtocols,
    Switching,
    IpAddressing,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::OsiModel => "osi_model",
            Topic::Subnetting => "subnetting",
            Topic::RoutingProtocols => "routing_protocols",
            Topic::Switching => "switching",
            Topic::IpAddressing => "ip_addressing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    /// The text content of the question.
    pub question_text: String,

    /// Ordered list of answer options (e.g., ["Option A", "Option B"]).
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Zero-based index into `options` of the correct answer.
    pub correct_answer: i64,

    /// Explanation of the correct answer, shown after grading.
    pub explanation: String,

    pub topic: Topic,

    pub difficulty_level: DifficultyLevel,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for inserting a question. Id and timestamp are server-assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_correct_answer))]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub question_text: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    pub correct_answer: i64,
    #[validate(length(min = 1, max = 2000))]
    pub explanation: String,
    pub topic: Topic,
    pub difficulty_level: DifficultyLevel,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("options_cannot_be_empty"));
    }
    for opt in options {
        if opt.len() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

/// The correct-answer index must point at an existing option.
fn validate_correct_answer(question: &NewQuestion) -> Result<(), validator::ValidationError> {
    if question.correct_answer < 0 || question.correct_answer as usize >= question.options.len() {
        return Err(validator::ValidationError::new("correct_answer_out_of_bounds"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(correct_answer: i64, options: Vec<String>) -> NewQuestion {
        NewQuestion {
            question_text: "How many layers are in the OSI model?".to_string(),
            options,
            correct_answer,
            explanation: "Seven.".to_string(),
            topic: Topic::OsiModel,
            difficulty_level: DifficultyLevel::Beginner,
        }
    }

    #[test]
    fn accepts_in_bounds_answer_index() {
        let q = new_question(2, vec!["5".into(), "6".into(), "7".into(), "8".into()]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_answer_index() {
        let q = new_question(4, vec!["5".into(), "6".into(), "7".into(), "8".into()]);
        assert!(q.validate().is_err());

        let q = new_question(-1, vec!["5".into(), "6".into(), "7".into(), "8".into()]);
        assert!(q.validate().is_err());
    }

    #[test]
    fn rejects_empty_options() {
        let q = new_question(0, vec![]);
        assert!(q.validate().is_err());
    }
}
