#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use kidsgames_api::{
    config::Config,
    create_router,
    services::{question_bank::QuestionBank, question_picker::QuestionPicker, AppState},
};

pub const MODEL_FILE: &str = "color_gestures/model.json";
pub const MODEL_BYTES: &[u8] = br#"{"format": "layers-model"}"#;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    // Dropped last so the files outlive the router.
    pub dir: TempDir,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub async fn create_test_app() -> TestApp {
    init_tracing();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::for_root(dir.path());

    let model_path = config.models_dir().join(MODEL_FILE);
    std::fs::create_dir_all(model_path.parent().unwrap()).unwrap();
    std::fs::write(&model_path, MODEL_BYTES).unwrap();
    std::fs::create_dir_all(config.static_dir.join("js")).unwrap();
    std::fs::write(config.static_dir.join("js/app.js"), "window.app = {};").unwrap();

    build(config, dir).await
}

/// App serving the crate's real `static/` directory, scores kept in a temp dir.
pub async fn create_app_with_shipped_assets() -> TestApp {
    init_tracing();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = Config::for_root(dir.path());
    config.static_dir = shipped_static_dir();

    build(config, dir).await
}

pub fn shipped_static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

async fn build(config: Config, dir: TempDir) -> TestApp {
    let picker = QuestionPicker::seeded(QuestionBank::color_quiz(), 11);
    let state = Arc::new(
        AppState::with_picker(config, picker)
            .await
            .expect("Failed to initialize test app state"),
    );

    TestApp {
        router: create_router(state.clone()),
        state,
        dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.post_raw(uri, serde_json::to_string(body).unwrap()).await
    }

    pub async fn scores(&self) -> Vec<serde_json::Value> {
        self.state.scores.load_all().await.unwrap()
    }
}
