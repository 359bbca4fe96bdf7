use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{
    errors::{AppError, AppResult},
    extraction::DocumentFormat,
    models::dto::request::UploadedFile,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Plain text of the uploaded document.
    async fn extract(&self, file: &UploadedFile, cancel: &CancellationToken) -> AppResult<String>;
}

/// Dispatches on the file extension to the format readers. Parsing runs on the
/// blocking pool.
#[derive(Debug, Default, Clone)]
pub struct DocumentTextExtractor;

impl DocumentTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, file: &UploadedFile, cancel: &CancellationToken) -> AppResult<String> {
        if file.is_empty() {
            return Err(AppError::EmptyInput("File is empty or missing.".to_string()));
        }

        let extension = file.extension();
        let format = DocumentFormat::from_extension(&extension).ok_or_else(|| {
            AppError::UnsupportedFormat(format!("File type '.{}' is not supported.", extension))
        })?;

        log::debug!("Extracting {:?} text from {}", format, file.file_name);

        let data = file.data.clone();
        let parse = tokio::task::spawn_blocking(move || format.extract(&data));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            joined = parse => match joined {
                Ok(result) => result,
                Err(e) if e.is_panic() => Err(AppError::ExtractionFailed(format!(
                    "The {:?} reader could not process '{}'",
                    format, file.file_name
                ))),
                Err(e) => Err(e.into()),
            },
        }
    }
}
