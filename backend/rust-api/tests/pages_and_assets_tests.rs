mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_static_pages_render() {
    let app = common::create_test_app().await;

    for (uri, title) in [
        ("/", "Learning Games"),
        ("/math", "Math Game"),
        ("/az-sign", "A-Z Sign Language"),
        ("/puzzle", "Puzzle"),
        ("/grammar", "Grammar"),
        ("/color", "Color Quiz"),
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let page = String::from_utf8(body).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"), "{uri}");
        assert!(page.contains(&format!("<title>{title}</title>")), "{uri}");
    }
}

#[tokio::test]
async fn test_model_file_is_served() {
    let app = common::create_test_app().await;

    let (status, body) = app
        .get(&format!("/models/{}", common::MODEL_FILE))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::MODEL_BYTES);
}

#[tokio::test]
async fn test_missing_model_is_404() {
    let app = common::create_test_app().await;

    let (status, _) = app.get("/models/nonexistent.glb").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_model_path_traversal_is_rejected() {
    let app = common::create_test_app().await;

    // The models dir is <root>/static/models, so two levels up is the
    // score file itself.
    std::fs::write(app.state.scores.path(), r#"[{"game":"color_quiz"}]"#).unwrap();
    assert!(app.dir.path().join("scores.json").exists());

    let (status, body) = app.get("/models/../../scores.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!String::from_utf8_lossy(&body).contains("color_quiz"));

    // A sibling of the models dir inside static/.
    std::fs::write(app.dir.path().join("static/secret.txt"), "hidden").unwrap();
    let (status, body) = app.get("/models/../secret.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, b"hidden");

    let (status, _) = app.get("/models/%2e%2e/%2e%2e/scores.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_dir_is_served() {
    let app = common::create_test_app().await;

    let (status, body) = app.get("/static/js/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"window.app = {};");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = common::create_test_app().await;

    let (status, body) = app.get("/no-such-game").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = common::create_test_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["questions"], 10);
    assert_eq!(body["dependencies"]["score_store"]["entries"], 0);
}

#[tokio::test]
async fn test_health_degrades_on_corrupt_store() {
    let app = common::create_test_app().await;
    std::fs::write(app.state.scores.path(), "oops").unwrap();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_responses_carry_trace_id_and_csp() {
    let app = common::create_test_app().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        axum::http::Request::builder()
            .uri("/")
            .header("x-trace-id", "trace-abc")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.headers()["x-trace-id"], "trace-abc");
    assert!(response
        .headers()
        .contains_key(axum::http::header::CONTENT_SECURITY_POLICY));
}

/// `src` of every `<script>` tag served from this app.
fn local_scripts(page: &str) -> Vec<String> {
    page.split("<script src=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|src| src.starts_with("/static/"))
        .map(String::from)
        .collect()
}

/// Element ids a client script looks up with `marker('<id>')`.
fn looked_up_ids(script: &str, marker: &str) -> Vec<String> {
    script
        .split(marker)
        .skip(1)
        .filter_map(|rest| {
            let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
            rest[1..].split(quote).next().map(String::from)
        })
        .collect()
}

#[tokio::test]
async fn test_every_page_script_is_served() {
    let app = common::create_app_with_shipped_assets().await;

    for uri in ["/", "/math", "/az-sign", "/puzzle", "/grammar", "/color", "/color_quiz"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let page = String::from_utf8(body).unwrap();

        let scripts = local_scripts(&page);
        assert!(scripts.contains(&"/static/js/app.js".to_string()), "{uri}");

        for src in scripts {
            let (status, script) = app.get(&src).await;
            assert_eq!(status, StatusCode::OK, "{uri} -> {src}");
            assert!(!script.is_empty(), "{src}");

            let script = String::from_utf8(script).unwrap();
            let mut ids = looked_up_ids(&script, "getElementById(");
            ids.extend(looked_up_ids(&script, "$("));
            for id in ids {
                assert!(
                    page.contains(&format!("id=\"{id}\"")),
                    "{uri}: {src} needs #{id}"
                );
            }
        }
    }
}

#[tokio::test]
async fn test_color_script_uses_existing_endpoints() {
    let script = std::fs::read_to_string(common::shipped_static_dir().join("js/color-game.js"))
        .unwrap();
    assert!(script.contains("/api/color_quiz/question"));
    assert!(script.contains("/check_color_answer"));
    assert!(!script.contains("/color-quiz-next"));
}

#[tokio::test]
async fn test_unrouted_paths_share_one_metrics_series() {
    let app = common::create_test_app().await;

    for i in 0..50 {
        let (status, _) = app.get(&format!("/scan-{i}/wp-login.php")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    app.get("/math").await;

    let (_, body) = app.get("/metrics").await;
    let text = String::from_utf8(body).unwrap();
    let requests: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .collect();

    assert!(requests.iter().all(|line| !line.contains("scan-")));
    let unmatched = requests
        .iter()
        .filter(|line| line.contains("path=\"unmatched\"") && line.contains("status=\"404\""))
        .count();
    assert_eq!(unmatched, 1);
    assert!(requests.iter().any(|line| line.contains("path=\"/math\"")));
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let app = common::create_test_app().await;
    app.get("/math").await;

    let (status, body) = app.get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("http_requests_total"));
}
