pub mod completion_client;
pub mod prompt_builder;
pub mod quiz_assembler;
pub mod quiz_service;
pub mod response_parser;
pub mod text_extractor;

pub use completion_client::{CompletionClient, GeminiClient};
pub use quiz_service::QuizGenerationService;
pub use text_extractor::{DocumentTextExtractor, TextExtractor};
