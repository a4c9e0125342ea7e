use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use common::types::Ack;
use serde::Deserialize;
use service::ScoreStore;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::page::render_page;

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub player: String,
}

#[derive(Debug, Deserialize)]
pub struct AddScoreRequest {
    pub player: String,
    pub score: i64,
    #[serde(default)]
    pub round: Option<usize>,
}

/// Full score page for the current board.
pub async fn index(State(store): State<ScoreStore>) -> Html<String> {
    let view = store.render().await;
    metrics::PAGE_RENDERS_TOTAL.inc();
    Html(render_page(&view))
}

/// Register a player; duplicates are acknowledged the same way.
pub async fn add_player(
    State(store): State<ScoreStore>,
    Json(req): Json<AddPlayerRequest>,
) -> Json<Ack> {
    if store.add_player(&req.player).await {
        metrics::PLAYERS_ADDED_TOTAL.inc();
    }
    Json(Ack { message: "Player added" })
}

/// Record a score; unknown players are acknowledged without effect.
pub async fn add_score(
    State(store): State<ScoreStore>,
    Json(req): Json<AddScoreRequest>,
) -> Result<Json<Ack>, JsonApiError> {
    if store.set_score(&req.player, req.round, req.score).await? {
        metrics::SCORES_RECORDED_TOTAL.inc();
    }
    Ok(Json(Ack { message: "Score added" }))
}

/// Clear the board and send the client back to the page.
pub async fn reset(State(store): State<ScoreStore>) -> Redirect {
    store.reset().await;
    metrics::RESETS_TOTAL.inc();
    Redirect::to("/")
}
