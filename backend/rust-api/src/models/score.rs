use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::quiz::Verdict;

pub const COLOR_QUIZ_GAME: &str = "color_quiz";

/// One graded color-quiz attempt as persisted in the score file.
///
/// `question` is whatever the client sent, usually a string. `timestamp` is
/// left empty by callers; the score store stamps it on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub game: String,
    pub question: Value,
    pub answer_given: String,
    pub correct_answer: String,
    pub result: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ScoreRecord {
    pub fn color_quiz(
        question: impl Into<Value>,
        answer_given: impl Into<String>,
        correct_answer: impl Into<String>,
        result: Verdict,
    ) -> Self {
        Self {
            game: COLOR_QUIZ_GAME.to_string(),
            question: question.into(),
            answer_given: answer_given.into(),
            correct_answer: correct_answer.into(),
            result,
            timestamp: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreSavedResponse {
    pub ok: bool,
}
