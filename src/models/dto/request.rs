use std::fmt;

use actix_multipart::form::{bytes::Bytes as FormBytes, text::Text, MultipartForm};
use actix_web::web::Bytes;
use validator::Validate;

use crate::constants::DEFAULT_LANGUAGE;
use crate::errors::AppError;
use crate::extraction::{base_name, file_extension};
use crate::models::domain::classification::{
    parse_classification_list, Classification, DifficultyLevel, QuestionType,
};

pub const UNTITLED_LECTURE: &str = "Untitled Lecture";

/// Raw multipart body of `POST /api/quiz/generate`. Every scalar arrives as text so
/// that binding problems surface as our own validation errors.
#[derive(MultipartForm)]
pub struct GenerateQuizForm {
    pub file: Option<FormBytes>,

    #[multipart(rename = "numberOfQuestions")]
    pub number_of_questions: Option<Text<String>>,

    #[multipart(rename = "questionTypes")]
    pub question_types: Vec<Text<String>>,

    #[multipart(rename = "difficultyLevels")]
    pub difficulty_levels: Vec<Text<String>>,

    pub language: Option<Text<String>>,

    #[multipart(rename = "includeAnswers")]
    pub include_answers: Option<Text<String>>,

    #[multipart(rename = "includeExplanations")]
    pub include_explanations: Option<Text<String>>,

    #[multipart(rename = "shuffleQuestions")]
    pub shuffle_questions: Option<Text<String>>,
}

/// An uploaded document held in memory.
#[derive(Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn extension(&self) -> String {
        file_extension(&self.file_name)
    }

    /// File name with its extension stripped.
    pub fn lecture_title(&self) -> String {
        let base = base_name(&self.file_name);
        let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem).trim();
        if stem.is_empty() {
            UNTITLED_LECTURE.to_string()
        } else {
            stem.to_string()
        }
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, Validate)]
pub struct GenerationRequest {
    pub file: UploadedFile,

    #[validate(range(
        min = 1,
        max = 100,
        message = "Number of questions must be between 1 and 100"
    ))]
    pub number_of_questions: u32,

    #[validate(length(min = 1, message = "At least one question type must be selected"))]
    pub question_types: Vec<QuestionType>,

    #[validate(length(min = 1, message = "At least one difficulty level must be selected"))]
    pub difficulty_levels: Vec<DifficultyLevel>,

    #[validate(length(max = 10, message = "Language code must be 10 characters or less"))]
    pub language: String,

    pub include_answers: bool,
    pub include_explanations: bool,
    pub shuffle_questions: bool,
}

impl GenerationRequest {
    /// A request with the service defaults for every optional field.
    pub fn new(
        file: UploadedFile,
        number_of_questions: u32,
        question_types: Vec<QuestionType>,
        difficulty_levels: Vec<DifficultyLevel>,
    ) -> Self {
        Self {
            file,
            number_of_questions,
            question_types,
            difficulty_levels,
            language: DEFAULT_LANGUAGE.to_string(),
            include_answers: true,
            include_explanations: false,
            shuffle_questions: true,
        }
    }
}

impl TryFrom<GenerateQuizForm> for GenerationRequest {
    type Error = AppError;

    fn try_from(form: GenerateQuizForm) -> Result<Self, Self::Error> {
        let file = form
            .file
            .map(|f| UploadedFile::new(f.file_name.unwrap_or_default(), f.data))
            .ok_or_else(|| {
                AppError::EmptyInput("File is required and cannot be empty.".to_string())
            })?;

        let number_of_questions = match non_blank(form.number_of_questions) {
            Some(value) => value.parse::<u32>().map_err(|_| {
                AppError::ValidationError(format!(
                    "Number of questions must be an integer between 1 and 100, got '{}'",
                    value
                ))
            })?,
            None => {
                return Err(AppError::ValidationError(
                    "Number of questions is required".to_string(),
                ))
            }
        };

        let question_types = parse_list::<QuestionType>(&form.question_types)?;
        let difficulty_levels = parse_list::<DifficultyLevel>(&form.difficulty_levels)?;

        let mut request =
            GenerationRequest::new(file, number_of_questions, question_types, difficulty_levels);

        if let Some(language) = non_blank(form.language) {
            request.language = language;
        }
        if let Some(flag) = parse_flag("includeAnswers", form.include_answers)? {
            request.include_answers = flag;
        }
        if let Some(flag) = parse_flag("includeExplanations", form.include_explanations)? {
            request.include_explanations = flag;
        }
        if let Some(flag) = parse_flag("shuffleQuestions", form.shuffle_questions)? {
            request.shuffle_questions = flag;
        }

        Ok(request)
    }
}

fn non_blank(value: Option<Text<String>>) -> Option<String> {
    value
        .map(|text| text.into_inner().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_list<T: Classification>(values: &[Text<String>]) -> Result<Vec<T>, AppError> {
    let raw: Vec<&str> = values.iter().map(|text| text.as_str()).collect();
    parse_classification_list::<T, _>(&raw).map_err(|rejected| {
        AppError::ValidationError(format!(
            "Invalid {} value(s): {}",
            T::KIND,
            rejected
                .iter()
                .map(|value| format!("'{}'", value))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

fn parse_flag(name: &str, value: Option<Text<String>>) -> Result<Option<bool>, AppError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };

    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(AppError::ValidationError(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}
