pub mod quiz;
pub mod score;

pub use quiz::{GradeRequest, GradeResponse, QuizQuestion, Verdict};
pub use score::{ScoreRecord, ScoreSavedResponse, COLOR_QUIZ_GAME};
