use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use config::Config;
pub use services::AppState;

/// CSP middleware adds Content-Security-Policy header to all responses
async fn csp_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https:; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; \
             media-src 'self' blob:; \
             connect-src 'self' https:",
        ),
    );
    response
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let static_dir = app_state.config.static_dir.clone();
    let models_dir = app_state.config.models_dir();

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .merge(page_routes())
        .merge(api_routes())
        // ServeDir rejects `..` segments and answers 404 for missing files
        .nest_service("/models", ServeDir::new(models_dir))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::fallback)
        .with_state(app_state)
        .layer(middleware::from_fn(csp_middleware))
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/math", get(handlers::pages::math_game))
        .route("/az-sign", get(handlers::pages::az_sign))
        .route("/puzzle", get(handlers::pages::puzzle_game))
        .route("/grammar", get(handlers::pages::grammar_game))
        .route("/color", get(handlers::pages::color_game))
        .route("/color_quiz", get(handlers::pages::color_quiz))
}

fn api_routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route(
            "/check_color_answer",
            post(handlers::color_quiz::check_color_answer),
        )
        .route(
            "/api/color_quiz/question",
            get(handlers::color_quiz::next_question),
        )
        .route("/api/score", post(handlers::scores::save_score))
        .layer(cors)
}
