use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

const ASSET_MOUNTS: [&str; 2] = ["/models/", "/static/"];
const UNMATCHED_ROUTE: &str = "unmatched";

/// Records request count and latency per method, route and status.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(req.uri().path(), req.extensions().get::<MatchedPath>());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &path])
        .observe(duration);

    response
}

/// Label for the `path` dimension. Only route templates and a fixed set of
/// placeholders are used, so request URLs cannot grow the label set.
fn route_label(path: &str, matched: Option<&MatchedPath>) -> String {
    for prefix in ASSET_MOUNTS {
        if path.starts_with(prefix) {
            return format!("{prefix}{{file}}");
        }
    }

    matched
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
