use axum::extract::State;
use maud::Markup;
use std::sync::Arc;

use crate::{metrics::QUESTIONS_SERVED_TOTAL, services::AppState, views};

pub async fn index() -> Markup {
    views::index()
}

pub async fn math_game() -> Markup {
    views::math()
}

pub async fn az_sign() -> Markup {
    views::az_sign()
}

pub async fn puzzle_game() -> Markup {
    views::puzzle()
}

pub async fn grammar_game() -> Markup {
    views::grammar()
}

/// Legacy color page, kept for old links.
pub async fn color_game() -> Markup {
    views::color_quiz(None)
}

pub async fn color_quiz(State(state): State<Arc<AppState>>) -> Markup {
    let question = state.questions.pick();
    QUESTIONS_SERVED_TOTAL.with_label_values(&["html"]).inc();
    tracing::debug!("Serving color quiz page: {:?}", question.question);
    views::color_quiz(Some(&question))
}
