use crate::errors::{AppError, AppResult};

/// Page text in document order.
pub fn extract(data: &[u8]) -> AppResult<String> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::ExtractionFailed(format!("Could not read PDF document: {}", e)))
}
