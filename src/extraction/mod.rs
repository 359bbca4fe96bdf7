//! Format-specific text extraction. Each reader takes the raw bytes of one
//! document and returns best-effort plain text in reading order.

mod pdf;
mod plain_text;
mod presentation;
mod spreadsheet;
mod word;

use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    PlainText,
}

impl DocumentFormat {
    /// Maps a lower-cased extension (without the dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" | "doc" => Some(DocumentFormat::Word),
            "xlsx" | "xls" => Some(DocumentFormat::Spreadsheet),
            "pptx" | "ppt" => Some(DocumentFormat::Presentation),
            "txt" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    pub fn extract(self, data: &[u8]) -> AppResult<String> {
        match self {
            DocumentFormat::Pdf => pdf::extract(data),
            DocumentFormat::Word => word::extract(data),
            DocumentFormat::Spreadsheet => spreadsheet::extract(data),
            DocumentFormat::Presentation => presentation::extract(data),
            DocumentFormat::PlainText => Ok(plain_text::extract(data)),
        }
    }
}

/// Last path component of a client-supplied file name.
pub fn base_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or(file_name)
}

/// Lower-cased extension without the dot, empty when there is none.
pub fn file_extension(file_name: &str) -> String {
    base_name(file_name)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// True when the file name carries one of the supported extensions.
pub fn supports_file_type(file_name: &str) -> bool {
    DocumentFormat::from_extension(&file_extension(file_name)).is_some()
}
