pub mod quiz_prompt;

/// File extensions accepted for upload, lower-case and without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 8] = ["pdf", "docx", "doc", "xlsx", "xls", "txt", "pptx", "ppt"];

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Extracted text shorter than this is treated as an empty, corrupted or image-only source.
pub const MIN_EXTRACTED_CHARS: usize = 100;

pub const MAX_PROMPT_CONTENT_CHARS: usize = 90_000;
pub const TRUNCATION_MARKER: &str = "\n\n[... Content truncated for processing ...]";

pub const DEFAULT_LANGUAGE: &str = "en";

pub const COMPLETION_TEMPERATURE: f32 = 0.7;
pub const COMPLETION_TOP_P: f32 = 0.95;
pub const COMPLETION_MAX_OUTPUT_TOKENS: u32 = 8192;
