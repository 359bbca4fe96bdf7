use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::models::domain::classification::{DifficultyLevel, QuestionType};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    #[serde(default)]
    pub question_number: u32, // reassigned by the assembler
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: DifficultyLevel,
    #[serde(default)]
    pub options: Option<Vec<String>>, // only for choice-style types
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answers: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_id: String,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl QuestionItem {
    /// Fills in an identifier when the model left it out or empty.
    pub fn ensure_question_id(&mut self) {
        if self.question_id.is_empty() {
            self.question_id = new_opaque_id();
        }
    }
}

/// 32 lowercase hex characters, no dashes.
pub fn new_opaque_id() -> String {
    Uuid::new_v4().simple().to_string()
}
