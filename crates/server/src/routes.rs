pub mod scores;

use std::path::Path;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::ScoreStore;

use crate::metrics;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics_handler() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: score page, write endpoints, assets and ops routes.
pub fn build_router(store: ScoreStore, assets_dir: impl AsRef<Path>, cors: CorsLayer) -> Router {
    let assets_dir = assets_dir.as_ref();

    let scores = Router::new()
        .route("/", get(scores::index))
        .route("/add_player", post(scores::add_player))
        .route("/add_score", post(scores::add_score))
        .route("/reset", get(scores::reset))
        .with_state(store);

    let assets = Router::new()
        .route_service("/rules.pdf", ServeFile::new(assets_dir.join("rules.pdf")))
        .route_service("/scoring.jpeg", ServeFile::new(assets_dir.join("scoring.jpeg")));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    scores
        .merge(assets)
        .merge(ops)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
