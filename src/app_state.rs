use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        completion_client::{CompletionClient, GeminiClient},
        quiz_service::QuizGenerationService,
        text_extractor::{DocumentTextExtractor, TextExtractor},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizGenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.completion_timeout())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        let completion = Arc::new(GeminiClient::new(
            http,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
        ));

        Ok(Self::with_components(
            config,
            Arc::new(DocumentTextExtractor::new()),
            completion,
        ))
    }

    /// Wires the service around caller-provided pipeline components.
    pub fn with_components(
        config: Config,
        extractor: Arc<dyn TextExtractor>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        let quiz_service = Arc::new(QuizGenerationService::new(
            extractor,
            completion,
            config.max_upload_bytes,
            config.shuffle_seed,
        ));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
