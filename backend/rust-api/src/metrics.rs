use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder,
    HistogramVec, IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .unwrap();

    // Quiz Metrics
    pub static ref QUESTIONS_SERVED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "questions_served_total",
        "Total number of quiz questions handed out",
        &["format"]
    )
    .unwrap();

    pub static ref COLOR_ANSWERS_GRADED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "color_answers_graded_total",
        "Total number of color quiz answers graded",
        &["result"]
    )
    .unwrap();

    pub static ref ANSWER_KEY_MISMATCH_TOTAL: IntCounter = register_int_counter!(
        "answer_key_mismatch_total",
        "Grading requests whose client-supplied answer disagrees with the question bank"
    )
    .unwrap();

    // Score store Metrics
    pub static ref SCORE_APPENDS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "score_appends_total",
        "Total number of score store appends",
        &["mode", "status"]
    )
    .unwrap();

    pub static ref SCORE_APPEND_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "score_append_duration_seconds",
        "Score store append duration in seconds, including lock wait",
        &["mode"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

/// Times a score store append and counts its outcome under `mode`.
pub async fn track_score_append<F, T, E>(mode: &str, future: F) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let start = std::time::Instant::now();
    let result = future.await;
    let duration = start.elapsed().as_secs_f64();

    let status = if result.is_ok() { "success" } else { "error" };

    SCORE_APPENDS_TOTAL.with_label_values(&[mode, status]).inc();
    SCORE_APPEND_DURATION_SECONDS
        .with_label_values(&[mode])
        .observe(duration);

    result
}
