use crate::models::Verdict;

/// Canonical form used for every answer comparison: trimmed and lower-cased.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Grades `given` against `expected`.
///
/// Comparison ignores case and surrounding whitespace. An empty answer on
/// either side is always wrong.
pub fn grade(given: &str, expected: &str) -> Verdict {
    let given = normalize_answer(given);
    let expected = normalize_answer(expected);

    if !given.is_empty() && given == expected {
        Verdict::Correct
    } else {
        Verdict::Wrong
    }
}
