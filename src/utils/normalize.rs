/// Canonical form used for answer comparison: lowercased, then trimmed.
pub fn normalize_answer(answer: &str) -> String {
    answer.to_lowercase().trim().to_string()
}

/// Case-insensitive, whitespace-trimmed equality of two answers.
pub fn answers_match(submitted: &str, correct: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(correct)
}
