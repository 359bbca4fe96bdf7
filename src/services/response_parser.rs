use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::dto::generated_quiz::{GeneratedQuiz, GENERATED_QUIZ_FIELDS},
};

/// Reduces a raw completion to the JSON document it most likely contains.
///
/// Fences are dropped, then the text is cut to the span between the first
/// opening bracket and the last matching closing bracket. Nested documents are
/// not handled.
pub fn sanitize_completion(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "{}".to_string();
    }

    let unfenced = raw.replace("```json", "").replace("```", "");
    let mut candidate = unfenced.trim();

    let object_start = candidate.find('{');
    let array_start = candidate.find('[');

    let bounds = match (object_start, array_start) {
        (Some(object), Some(array)) if object < array => Some((object, '}')),
        (Some(object), None) => Some((object, '}')),
        (_, Some(array)) => Some((array, ']')),
        (None, None) => None,
    };

    if let Some((start, closing)) = bounds {
        candidate = &candidate[start..];
        if let Some(end) = candidate.rfind(closing) {
            candidate = &candidate[..end + closing.len_utf8()];
        }
    }

    candidate.trim().to_string()
}

/// Rewrites object keys that match a known field name case-insensitively to
/// that field's canonical spelling. Unknown keys are left alone.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, child) in map {
                let key = GENERATED_QUIZ_FIELDS
                    .iter()
                    .find(|field| field.eq_ignore_ascii_case(&key))
                    .map_or(key, |field| field.to_string());
                normalized.insert(key, normalize_keys(child));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Sanitizes and deserializes a completion into a [`GeneratedQuiz`] that has at
/// least one question.
pub fn parse_generated_quiz(raw: &str) -> AppResult<GeneratedQuiz> {
    let cleaned = sanitize_completion(raw);
    log::debug!("Cleaned completion is {} chars", cleaned.len());

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        log::warn!("Completion is not valid JSON: {}", e);
        AppError::MalformedResponse(format!("Generated content is not valid JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(AppError::MalformedResponse(
            "Generated content is not a JSON object".to_string(),
        ));
    }

    let quiz: GeneratedQuiz = serde_json::from_value(normalize_keys(value)).map_err(|e| {
        log::warn!("Completion does not match the quiz shape: {}", e);
        AppError::MalformedResponse(format!("Generated content has an unexpected shape: {}", e))
    })?;

    match quiz.questions.as_deref() {
        Some(questions) if !questions.is_empty() => Ok(quiz),
        _ => Err(AppError::EmptyGeneratedContent(
            "The model did not return any questions".to_string(),
        )),
    }
}
