use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One fixed multiple-choice item of the color quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
    pub options: Vec<String>,
}

/// Outcome of grading a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Wrong,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Wrong => "wrong",
        }
    }
}

/// Body of `POST /check_color_answer`.
///
/// Every field is optional, so a sloppy client still gets a verdict instead
/// of a rejection. Non-string `answer` and `correct` values are treated as
/// absent. `question` is only echoed into the score log, so it is kept as
/// whatever JSON the client sent, `null` included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub correct: Option<String>,
    #[serde(default, deserialize_with = "any_present")]
    pub question: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    pub result: Verdict,
}

/// `Some` for any value that is present, `null` included; `None` only when
/// the field is missing altogether.
fn any_present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

fn string_or_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}
