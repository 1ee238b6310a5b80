use std::path::{Path, PathBuf};

use thiserror::Error;

use super::grader::normalize_answer;
use crate::models::QuizQuestion;

#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question #{index} ({question:?}): answer {answer:?} is not one of its options")]
    AnswerNotInOptions {
        index: usize,
        question: String,
        answer: String,
    },
    #[error("failed to read question bank {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question bank {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

const COLOR_QUESTIONS: [(&str, &str, [&str; 4]); 10] = [
    (
        "Which color is the sky on a clear day?",
        "Blue",
        ["Blue", "Green", "Red", "Yellow"],
    ),
    (
        "What color are bananas?",
        "Yellow",
        ["Yellow", "Red", "Orange", "Pink"],
    ),
    (
        "Which color is made by mixing red and blue?",
        "Purple",
        ["Purple", "Brown", "Green", "Grey"],
    ),
    (
        "What color is grass?",
        "Green",
        ["Green", "Blue", "Black", "Red"],
    ),
    (
        "What color is fire?",
        "Orange",
        ["Orange", "Pink", "Blue", "White"],
    ),
    (
        "What color are strawberries?",
        "Red",
        ["Red", "Blue", "Yellow", "Green"],
    ),
    (
        "What color is a lemon?",
        "Yellow",
        ["Yellow", "Blue", "Brown", "Pink"],
    ),
    (
        "What color is the ocean?",
        "Blue",
        ["Blue", "Red", "Green", "Orange"],
    ),
    (
        "Which color is a ripe apple most often?",
        "Red",
        ["Red", "Purple", "Black", "Yellow"],
    ),
    (
        "What color is snow?",
        "White",
        ["White", "Green", "Blue", "Brown"],
    ),
];

/// Immutable, non-empty list of quiz questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        for (index, q) in questions.iter().enumerate() {
            let answer = normalize_answer(&q.answer);
            if !q.options.iter().any(|opt| normalize_answer(opt) == answer) {
                return Err(QuestionBankError::AnswerNotInOptions {
                    index,
                    question: q.question.clone(),
                    answer: q.answer.clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// The built-in color quiz.
    pub fn color_quiz() -> Self {
        let questions = COLOR_QUESTIONS
            .iter()
            .map(|(question, answer, options)| QuizQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                options: options.iter().map(|opt| opt.to_string()).collect(),
            })
            .collect();

        Self { questions }
    }

    /// Loads a JSON array of `{question, answer, options}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, QuestionBankError> {
        let raw = std::fs::read(path).map_err(|source| QuestionBankError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let questions: Vec<QuizQuestion> =
            serde_json::from_slice(&raw).map_err(|source| QuestionBankError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let bank = Self::new(questions)?;
        tracing::info!(
            "Loaded {} questions from {}",
            bank.questions.len(),
            path.display()
        );
        Ok(bank)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Looks up a question by its text, ignoring surrounding whitespace.
    pub fn find_by_text(&self, text: &str) -> Option<&QuizQuestion> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.questions.iter().find(|q| q.question.trim() == text)
    }
}
