use serde::Deserialize;
use serde_json::Value;

use crate::models::domain::QuestionItem;

/// Quiz as claimed by the model. Only `questions` is carried forward; the
/// metadata fields are kept for diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    #[serde(default)]
    pub quiz_id: Option<Value>,
    #[serde(default)]
    pub lecture_title: Option<Value>,
    #[serde(default)]
    pub total_questions: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
    #[serde(default)]
    pub generated_at: Option<Value>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionItem>>,
}

/// Canonical field names of the upstream payload, matched case-insensitively.
pub const GENERATED_QUIZ_FIELDS: &[&str] = &[
    "quizId",
    "lectureTitle",
    "totalQuestions",
    "language",
    "generatedAt",
    "requestedQuestionTypes",
    "requestedDifficultyLevels",
    "questions",
    "questionNumber",
    "text",
    "type",
    "difficulty",
    "options",
    "correctAnswers",
    "explanation",
    "questionId",
];

impl GeneratedQuiz {
    /// The question count the model claims, if it sent a usable number.
    pub fn claimed_total(&self) -> Option<u64> {
        self.total_questions.as_ref().and_then(Value::as_u64)
    }
}
