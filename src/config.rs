use std::env;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::constants::DEFAULT_MAX_UPLOAD_BYTES;

const DEFAULT_GEMINI_API_KEY: &str = "gemini_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub gemini_api_key: SecretString,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub max_upload_bytes: usize,
    pub request_timeout_secs: u64,
    pub completion_timeout_secs: u64,
    pub shuffle_seed: Option<u64>,
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT").unwrap_or(8080),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| DEFAULT_GEMINI_API_KEY.to_string()),
            ),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            max_upload_bytes: parsed_var("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            request_timeout_secs: parsed_var("REQUEST_TIMEOUT_SECS").unwrap_or(120),
            completion_timeout_secs: parsed_var("COMPLETION_TIMEOUT_SECS").unwrap_or(100),
            shuffle_seed: parsed_var("QUIZ_SHUFFLE_SEED"),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate that production-critical configuration is set
    /// Panics if the Gemini key is still the placeholder
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.gemini_api_key.expose_secret();

        if api_key.trim().is_empty() || api_key == DEFAULT_GEMINI_API_KEY {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }

        if self.max_upload_bytes == 0 {
            panic!("FATAL: MAX_UPLOAD_BYTES must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            gemini_api_key: SecretString::from("test-gemini-key".to_string()),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            gemini_model: "gemini-test".to_string(),
            max_upload_bytes: 1024 * 1024,
            request_timeout_secs: 5,
            completion_timeout_secs: 4,
            shuffle_seed: Some(7),
        }
    }
}
