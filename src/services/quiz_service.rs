use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::{
    constants::{MAX_PROMPT_CONTENT_CHARS, MIN_EXTRACTED_CHARS},
    errors::{AppError, AppResult},
    extraction::supports_file_type,
    models::{domain::QuizResult, dto::request::GenerationRequest},
    services::{
        completion_client::CompletionClient,
        prompt_builder::{build_quiz_prompt, truncate_lecture_text},
        quiz_assembler::finalize_quiz,
        response_parser::parse_generated_quiz,
        text_extractor::TextExtractor,
    },
};

pub struct QuizGenerationService {
    extractor: Arc<dyn TextExtractor>,
    completion: Arc<dyn CompletionClient>,
    max_upload_bytes: usize,
    shuffle_seed: Option<u64>,
}

impl QuizGenerationService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        completion: Arc<dyn CompletionClient>,
        max_upload_bytes: usize,
        shuffle_seed: Option<u64>,
    ) -> Self {
        Self {
            extractor,
            completion,
            max_upload_bytes,
            shuffle_seed,
        }
    }

    pub async fn generate_quiz(
        &self,
        request: GenerationRequest,
        cancel: &CancellationToken,
    ) -> AppResult<QuizResult> {
        let file = &request.file;

        if file.is_empty() {
            return Err(AppError::EmptyInput(
                "File is required and cannot be empty.".to_string(),
            ));
        }

        if !supports_file_type(&file.file_name) {
            log::info!("Rejected unsupported upload {}", file.file_name);
            return Err(AppError::UnsupportedFormat(format!(
                "File type '.{}' is not supported.",
                file.extension()
            )));
        }

        if file.len() > self.max_upload_bytes {
            return Err(AppError::FileTooLarge(format!(
                "File size {} bytes exceeds the limit of {} bytes.",
                file.len(),
                self.max_upload_bytes
            )));
        }

        request.validate()?;

        log::info!(
            "Generating {} questions from {} ({} bytes, language {})",
            request.number_of_questions,
            file.file_name,
            file.len(),
            request.language
        );

        let text = self.extractor.extract(file, cancel).await?;
        let extracted_chars = text.chars().count();
        if text.trim().is_empty() || extracted_chars < MIN_EXTRACTED_CHARS {
            return Err(AppError::InsufficientText(format!(
                "Extracted text has {} characters; at least {} are required to generate a quiz.",
                extracted_chars, MIN_EXTRACTED_CHARS
            )));
        }
        log::info!("Extracted {} characters from {}", extracted_chars, file.file_name);

        if extracted_chars > MAX_PROMPT_CONTENT_CHARS {
            log::warn!(
                "Lecture text truncated from {} to {} characters",
                extracted_chars,
                MAX_PROMPT_CONTENT_CHARS
            );
        }
        let content = truncate_lecture_text(&text);

        let lecture_title = file.lecture_title();
        let prompt = build_quiz_prompt(&content, &request, &lecture_title);
        log::info!("Built prompt for '{}'", lecture_title);

        let completion = self.completion.complete(&prompt, cancel).await?;
        log::info!("Received completion ({} chars)", completion.len());

        let generated = parse_generated_quiz(&completion)?;

        let mut rng = match self.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let quiz = finalize_quiz(generated, &request, &lecture_title, &mut rng);

        log::info!(
            "Generated quiz {} with {} questions",
            quiz.quiz_id,
            quiz.total_questions
        );

        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{DifficultyLevel, QuestionType},
        models::dto::request::UploadedFile,
        services::{completion_client::MockCompletionClient, text_extractor::MockTextExtractor},
        test_utils::fixtures::{lecture_text, quiz_completion, sample_request},
    };

    const MAX_BYTES: usize = 1024;

    fn service(extractor: MockTextExtractor, completion: MockCompletionClient) -> QuizGenerationService {
        QuizGenerationService::new(Arc::new(extractor), Arc::new(completion), MAX_BYTES, Some(42))
    }

    fn untouched() -> (MockTextExtractor, MockCompletionClient) {
        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract().never();
        let mut completion = MockCompletionClient::new();
        completion.expect_complete().never();
        (extractor, completion)
    }

    #[tokio::test]
    async fn generates_quiz_from_lecture() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .times(1)
            .returning(|_, _| Ok(lecture_text(2_000)));

        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .withf(|prompt, _| prompt.contains("- Title: Ownership") && prompt.contains("EXACTLY 5"))
            .times(1)
            .returning(|_, _| Ok(quiz_completion(5, "MultipleChoice", "Medium")));

        let quiz = service(extractor, completion)
            .generate_quiz(sample_request("Ownership.txt", 5), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(quiz.total_questions, 5);
        assert_eq!(quiz.lecture_title, "Ownership");
        assert!(quiz
            .questions
            .iter()
            .all(|q| q.question_type == QuestionType::MultipleChoice
                && q.difficulty == DifficultyLevel::Medium));

        let mut ids: Vec<&str> = quiz.questions.iter().map(|q| q.question_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn unsupported_extension_skips_extraction() {
        let (extractor, completion) = untouched();
        let err = service(extractor, completion)
            .generate_quiz(sample_request("virus.exe", 5), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let (extractor, completion) = untouched();
        let mut request = sample_request("notes.txt", 5);
        request.file = UploadedFile::new("notes.txt", Vec::new());

        let err = service(extractor, completion)
            .generate_quiz(request, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyInput(_)));
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let (extractor, completion) = untouched();
        let mut request = sample_request("notes.txt", 5);
        request.file = UploadedFile::new("notes.txt", vec![b'a'; MAX_BYTES + 1]);

        let err = service(extractor, completion)
            .generate_quiz(request, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge(_)));
    }

    #[tokio::test]
    async fn invalid_request_fails_validation() {
        let (extractor, completion) = untouched();
        let err = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 101), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn short_text_is_insufficient() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_, _| Ok("Too short to quiz on.".to_string()));
        let mut completion = MockCompletionClient::new();
        completion.expect_complete().never();

        let err = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 5), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InsufficientText(_)));
    }

    #[tokio::test]
    async fn long_text_is_truncated_before_prompting() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_, _| Ok("z".repeat(MAX_PROMPT_CONTENT_CHARS + 500)));

        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .withf(|prompt, _| {
                prompt.contains("[... Content truncated for processing ...]")
                    && !prompt.contains(&"z".repeat(MAX_PROMPT_CONTENT_CHARS + 1))
            })
            .returning(|_, _| Ok(quiz_completion(2, "TrueFalse", "Easy")));

        let quiz = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 2), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(quiz.total_questions, 2);
    }

    #[tokio::test]
    async fn completion_errors_propagate() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_, _| Ok(lecture_text(500)));
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .returning(|_, _| Err(AppError::Upstream("Gemini error 503".to_string())));

        let err = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 5), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn prose_wrapped_completion_is_recovered() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_, _| Ok(lecture_text(500)));
        let mut completion = MockCompletionClient::new();
        completion.expect_complete().returning(|_, _| {
            Ok(format!(
                "Here is the quiz you asked for:\n```json\n{}\n```\nGood luck!",
                quiz_completion(3, "OpenEnded", "Hard")
            ))
        });

        let quiz = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 5), &CancellationToken::new())
            .await
            .unwrap();

        let numbers: Vec<u32> = quiz.questions.iter().map(|q| q.question_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(quiz.total_questions, 3);
    }

    #[tokio::test]
    async fn non_json_completion_is_malformed() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_, _| Ok(lecture_text(500)));
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .returning(|_, _| Ok("I cannot help with that.".to_string()));

        let err = service(extractor, completion)
            .generate_quiz(sample_request("notes.txt", 5), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
