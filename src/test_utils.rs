#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::{
        domain::{DifficultyLevel, QuestionType},
        dto::request::{GenerationRequest, UploadedFile},
    };

    const LECTURE_SENTENCE: &str =
        "Ownership rules govern how a Rust program manages memory without a garbage collector. ";

    /// Lecture prose of exactly `chars` characters
    pub fn lecture_text(chars: usize) -> String {
        LECTURE_SENTENCE.chars().cycle().take(chars).collect()
    }

    /// A five-field request for MultipleChoice / Medium with a small text body
    pub fn sample_request(file_name: &str, number_of_questions: u32) -> GenerationRequest {
        GenerationRequest::new(
            UploadedFile::new(file_name, lecture_text(300)),
            number_of_questions,
            vec![QuestionType::MultipleChoice],
            vec![DifficultyLevel::Medium],
        )
    }

    /// A completion body holding `count` questions of one type and difficulty
    pub fn quiz_completion(count: usize, question_type: &str, difficulty: &str) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "questionNumber": i,
                    "text": format!("Question {} about ownership?", i),
                    "type": question_type,
                    "difficulty": difficulty,
                    "options": ["Option A", "Option B", "Option C", "Option D"],
                    "correctAnswers": ["Option A"],
                    "explanation": null,
                    "questionId": format!("generated-{}", i)
                })
            })
            .collect();

        json!({
            "quizId": "auto-generated",
            "lectureTitle": "Not The Real Title",
            "totalQuestions": count,
            "language": "en",
            "generatedAt": "<ISO-8601 UTC timestamp>",
            "questions": questions
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_parser::parse_generated_quiz;

    #[test]
    fn lecture_text_has_requested_length() {
        assert_eq!(lecture_text(0), "");
        assert_eq!(lecture_text(250).chars().count(), 250);
    }

    #[test]
    fn sample_request_is_valid() {
        use validator::Validate;

        let request = sample_request("Week 1.txt", 5);
        assert!(request.validate().is_ok());
        assert_eq!(request.file.lecture_title(), "Week 1");
    }

    #[test]
    fn quiz_completion_parses() {
        let quiz = parse_generated_quiz(&quiz_completion(3, "TrueFalse", "Easy")).unwrap();
        assert_eq!(quiz.questions.unwrap().len(), 3);
    }
}
