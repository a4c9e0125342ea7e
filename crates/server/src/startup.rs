use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::metrics;
use crate::routes;
use service::ScoreStore;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Build the router with a fresh, empty scoreboard.
pub fn build_app(cfg: &AppConfig) -> Router {
    let store = ScoreStore::new(cfg.scoreboard.max_round_index);
    routes::build_router(store, &cfg.scoreboard.assets_dir, build_cors())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: check the environment, build the app and run the HTTP server.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_env(&cfg.scoreboard.assets_dir).await?;
    metrics::init();

    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    info!(%addr, assets_dir = %cfg.scoreboard.assets_dir, "score server listening");
    serve(listener, app, shutdown).await
}
