use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{
    classification::{DifficultyLevel, QuestionType},
    quiz_question::QuestionItem,
};

/// The quiz returned to the caller. Every metadata field is set by the service,
/// never taken from the model output.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub lecture_title: String,
    pub total_questions: usize, // always questions.len()
    pub language: String,
    pub generated_at: DateTime<Utc>,
    pub requested_question_types: Vec<QuestionType>,
    pub requested_difficulty_levels: Vec<DifficultyLevel>,
    pub questions: Vec<QuestionItem>,
}
