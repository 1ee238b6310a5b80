use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    extractors::LenientJson,
    metrics::QUESTIONS_SERVED_TOTAL,
    models::{GradeRequest, GradeResponse, QuizQuestion},
    services::{color_quiz_service::ColorQuizService, AppState},
};

/// POST /check_color_answer
///
/// Always 200: a missing or malformed body is simply a wrong answer.
pub async fn check_color_answer(
    State(state): State<Arc<AppState>>,
    LenientJson(req): LenientJson<GradeRequest>,
) -> Json<GradeResponse> {
    let req = req.unwrap_or_default();
    let service = ColorQuizService::new(&state.questions, &state.scores);
    Json(service.check_answer(&req).await)
}

/// GET /api/color_quiz/question
pub async fn next_question(State(state): State<Arc<AppState>>) -> Json<QuizQuestion> {
    QUESTIONS_SERVED_TOTAL.with_label_values(&["json"]).inc();
    Json(state.questions.pick())
}
