pub const QUIZ_GENERATOR_ROLE: &str =
    "You are an expert educational quiz generator for university-level courses.";

pub const QUIZ_GENERATION_RULES: &str = "2. Use ONLY the specified question types and difficulty levels
3. Distribute questions evenly across types and difficulties
4. For MultipleChoice: provide exactly 4 plausible options
5. For TrueFalse: provide options [\"True\", \"False\"]
6. For other types: set options to null or empty array
7. Base ALL questions strictly on the provided lecture content";

pub const RAW_JSON_ONLY: &str =
    "**CRITICAL: Return ONLY valid JSON. No markdown, no explanations, no extra text.**";

/// Stands in for the timestamp in the schema example; the service assigns the real one.
pub const GENERATED_AT_PLACEHOLDER: &str = "<ISO-8601 UTC timestamp>";

pub const QUESTION_EXAMPLE_HEAD: &str = "  \"questions\": [
    {
      \"questionNumber\": 1,
      \"text\": \"Your question text here?\",
      \"type\": \"MultipleChoice\",
      \"difficulty\": \"Medium\",
      \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
      \"correctAnswers\": [\"Option A\"],";

pub const QUESTION_EXAMPLE_TAIL: &str = "      \"questionId\": \"unique-id\"
    }
  ]
}";
