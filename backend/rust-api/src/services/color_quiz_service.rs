use serde_json::Value;

use super::grader::{grade, normalize_answer};
use super::question_picker::QuestionPicker;
use super::score_store::ScoreStore;
use crate::metrics::{ANSWER_KEY_MISMATCH_TOTAL, COLOR_ANSWERS_GRADED_TOTAL};
use crate::models::{GradeRequest, GradeResponse, ScoreRecord};

pub struct ColorQuizService<'a> {
    questions: &'a QuestionPicker,
    scores: &'a ScoreStore,
}

impl<'a> ColorQuizService<'a> {
    pub fn new(questions: &'a QuestionPicker, scores: &'a ScoreStore) -> Self {
        Self { questions, scores }
    }

    /// Grades one answer and logs the attempt.
    ///
    /// The expected answer comes from the request. Logging is best effort and
    /// never changes the verdict.
    pub async fn check_answer(&self, req: &GradeRequest) -> GradeResponse {
        let given = req.answer.as_deref().unwrap_or_default();
        let expected = req.correct.as_deref().unwrap_or_default();
        let question = req
            .question
            .clone()
            .unwrap_or_else(|| Value::String(String::new()));

        let result = grade(given, expected);
        COLOR_ANSWERS_GRADED_TOTAL
            .with_label_values(&[result.as_str()])
            .inc();

        if let Some(text) = question.as_str() {
            self.cross_check_answer_key(text, expected);
        }

        tracing::info!(
            "Graded color quiz answer: question={}, result={}",
            question,
            result.as_str()
        );

        let record = ScoreRecord::color_quiz(
            question,
            normalize_answer(given),
            normalize_answer(expected),
            result,
        );
        if !self.scores.append_tolerant(&record).await {
            tracing::warn!(
                "Color quiz attempt not logged (result={})",
                result.as_str()
            );
        }

        GradeResponse { result }
    }

    /// Flags requests whose expected answer disagrees with the bank.
    fn cross_check_answer_key(&self, question: &str, expected: &str) -> bool {
        let Some(known) = self.questions.bank().find_by_text(question) else {
            return true;
        };

        if normalize_answer(&known.answer) == normalize_answer(expected) {
            return true;
        }

        ANSWER_KEY_MISMATCH_TOTAL.inc();
        tracing::warn!(
            "Client answer key {:?} disagrees with bank answer {:?} for {:?}",
            expected,
            known.answer,
            question
        );
        false
    }
}
