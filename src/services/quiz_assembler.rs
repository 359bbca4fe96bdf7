use chrono::Utc;
use rand::{seq::SliceRandom, Rng};

use crate::models::{
    domain::{quiz_question::new_opaque_id, QuizResult},
    dto::{generated_quiz::GeneratedQuiz, request::GenerationRequest},
};

/// Builds the caller-facing quiz from the model's questions. All metadata comes
/// from the request and the service, whatever the model claimed.
pub fn finalize_quiz<R: Rng + ?Sized>(
    generated: GeneratedQuiz,
    request: &GenerationRequest,
    lecture_title: &str,
    rng: &mut R,
) -> QuizResult {
    if let Some(claimed) = generated.claimed_total() {
        let actual = generated.questions.as_ref().map_or(0, Vec::len);
        if claimed != actual as u64 {
            log::warn!(
                "Model claimed {} questions but returned {}",
                claimed,
                actual
            );
        }
    }

    let mut questions = generated.questions.unwrap_or_default();
    for question in questions.iter_mut() {
        question.ensure_question_id();
    }

    if request.shuffle_questions && questions.len() > 1 {
        questions.shuffle(rng);
    }

    for (index, question) in questions.iter_mut().enumerate() {
        question.question_number = index as u32 + 1;
    }

    QuizResult {
        quiz_id: new_opaque_id(),
        lecture_title: lecture_title.to_string(),
        total_questions: questions.len(),
        language: request.language.clone(),
        generated_at: Utc::now(),
        requested_question_types: request.question_types.clone(),
        requested_difficulty_levels: request.difficulty_levels.clone(),
        questions,
    }
}
