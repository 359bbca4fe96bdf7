use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;

use crate::{
    constants::{COMPLETION_MAX_OUTPUT_TOKENS, COMPLETION_TEMPERATURE, COMPLETION_TOP_P},
    errors::{AppError, AppResult},
    models::dto::gemini::{GenerateContentRequest, GenerateContentResponse, GenerationConfig},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one prompt and returns the model's text reply.
    async fn complete(&self, prompt: &str, cancel: &CancellationToken) -> AppResult<String>;
}

pub fn default_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: COMPLETION_TEMPERATURE,
        top_p: COMPLETION_TOP_P,
        max_output_tokens: COMPLETION_MAX_OUTPUT_TOKENS,
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            generation_config: default_generation_config(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn send(&self, prompt: &str) -> AppResult<String> {
        let body = GenerateContentRequest::from_prompt(prompt, self.generation_config);

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Gemini returned {}: {}", status, detail);
            return Err(AppError::Upstream(format!(
                "Gemini error {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            log::error!("Gemini response envelope could not be decoded: {}", e);
            AppError::Upstream(format!("Invalid Gemini response envelope: {}", e))
        })?;

        let text = envelope
            .first_text()
            .ok_or_else(|| AppError::Upstream("Gemini response contained no text".to_string()))?;

        Ok(text.trim_matches(|c| c == '`' || c == ' ' || c == '\n').to_string())
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str, cancel: &CancellationToken) -> AppResult<String> {
        log::debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            prompt.chars().count()
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            result = self.send(prompt) => result,
        }
    }
}
