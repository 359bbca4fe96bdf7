use std::borrow::Cow;

use crate::{
    constants::{
        quiz_prompt::{
            GENERATED_AT_PLACEHOLDER, QUESTION_EXAMPLE_HEAD, QUESTION_EXAMPLE_TAIL,
            QUIZ_GENERATION_RULES, QUIZ_GENERATOR_ROLE, RAW_JSON_ONLY,
        },
        MAX_PROMPT_CONTENT_CHARS, TRUNCATION_MARKER,
    },
    models::{domain::Classification, dto::request::GenerationRequest},
};

/// Caps lecture text at [`MAX_PROMPT_CONTENT_CHARS`] characters, appending
/// [`TRUNCATION_MARKER`] when anything was cut.
pub fn truncate_lecture_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_PROMPT_CONTENT_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], TRUNCATION_MARKER)),
        None => Cow::Borrowed(text),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn join_names<T: Classification>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.name())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders the generation prompt. Deterministic for the same inputs.
pub fn build_quiz_prompt(lecture_text: &str, request: &GenerationRequest, lecture_title: &str) -> String {
    let explanation_example = if request.include_explanations {
        "\"Explanation here\""
    } else {
        "null"
    };

    format!(
        "{role}

**LECTURE INFORMATION:**
- Title: {title}
- Language: {language}

**GENERATION REQUIREMENTS:**
- Total Questions: {count}
- Question Types: {types}
- Difficulty Levels: {difficulties}
- Include Correct Answers: {answers}
- Include Explanations: {explanations}

**LECTURE CONTENT:**
{content}

**INSTRUCTIONS:**
1. Generate EXACTLY {count} questions based on the lecture content
{rules}

{raw_json_only}

**REQUIRED JSON FORMAT:**
{{
  \"quizId\": \"auto-generated\",
  \"lectureTitle\": \"{title}\",
  \"totalQuestions\": {count},
  \"language\": \"{language}\",
  \"generatedAt\": \"{generated_at}\",
  \"requestedQuestionTypes\": [\"{type_list}\"],
  \"requestedDifficultyLevels\": [\"{difficulty_list}\"],
{example_head}
      \"explanation\": {explanation_example},
{example_tail}

Generate the quiz in {language} language NOW:
",
        role = QUIZ_GENERATOR_ROLE,
        title = lecture_title,
        language = request.language,
        count = request.number_of_questions,
        types = join_names(&request.question_types, ", "),
        difficulties = join_names(&request.difficulty_levels, ", "),
        answers = yes_no(request.include_answers),
        explanations = yes_no(request.include_explanations),
        content = lecture_text,
        rules = QUIZ_GENERATION_RULES,
        raw_json_only = RAW_JSON_ONLY,
        generated_at = GENERATED_AT_PLACEHOLDER,
        type_list = join_names(&request.question_types, "\", \""),
        difficulty_list = join_names(&request.difficulty_levels, "\", \""),
        example_head = QUESTION_EXAMPLE_HEAD,
        explanation_example = explanation_example,
        example_tail = QUESTION_EXAMPLE_TAIL,
    )
}
