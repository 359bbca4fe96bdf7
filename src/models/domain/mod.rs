pub mod classification;
pub mod quiz;
pub mod quiz_question;
pub use classification::{Classification, DifficultyLevel, QuestionType};
pub use quiz::QuizResult;
pub use quiz_question::QuestionItem;
