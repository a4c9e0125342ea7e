use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static PLAYERS_ADDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("farkle_players_added_total", "Players newly registered")
        .expect("register players_added_total")
});

pub static SCORES_RECORDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("farkle_scores_recorded_total", "Scores written for known players")
        .expect("register scores_recorded_total")
});

pub static RESETS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("farkle_resets_total", "Scoreboard resets")
        .expect("register resets_total")
});

pub static PAGE_RENDERS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("farkle_page_renders_total", "Score page renders")
        .expect("register page_renders_total")
});

/// Force registration so every counter shows up on the first scrape.
pub fn init() {
    Lazy::force(&PLAYERS_ADDED_TOTAL);
    Lazy::force(&SCORES_RECORDED_TOTAL);
    Lazy::force(&RESETS_TOTAL);
    Lazy::force(&PAGE_RENDERS_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_metrics_list_counters() {
        init();
        RESETS_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("farkle_resets_total"));
        assert!(body.contains("farkle_players_added_total"));
    }
}
