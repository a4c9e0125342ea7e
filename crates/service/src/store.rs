use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::scoreboard::{ScoreView, Scoreboard, DEFAULT_ROUND_LIMIT};

/// Shared, lock-guarded scoreboard for the lifetime of the process.
///
/// Cloning is cheap and every clone sees the same board.
#[derive(Clone)]
pub struct ScoreStore {
    inner: Arc<RwLock<Scoreboard>>,
}

impl ScoreStore {
    /// Create an empty store; `round_limit` bounds the round index `set_score` accepts.
    pub fn new(round_limit: usize) -> Self {
        Self { inner: Arc::new(RwLock::new(Scoreboard::with_round_limit(round_limit))) }
    }

    /// Register a player; returns whether it was newly added.
    pub async fn add_player(&self, name: &str) -> bool {
        let mut board = self.inner.write().await;
        let added = board.add_player(name);
        if added {
            info!(player = %name, players = board.len(), "player added");
        } else {
            debug!(player = %name, "player already registered");
        }
        added
    }

    /// Record a score. `Ok(false)` means the player is unknown and nothing changed.
    pub async fn set_score(
        &self,
        name: &str,
        round: Option<usize>,
        value: i64,
    ) -> Result<bool, ServiceError> {
        let mut board = self.inner.write().await;
        let recorded = board.set_score(name, round, value)?;
        if recorded {
            info!(player = %name, ?round, score = value, "score recorded");
        } else {
            debug!(player = %name, ?round, "score for unknown player ignored");
        }
        Ok(recorded)
    }

    pub async fn reset(&self) {
        let mut board = self.inner.write().await;
        let players = board.len();
        board.reset();
        info!(players, "scoreboard reset");
    }

    pub async fn render(&self) -> ScoreView {
        self.inner.read().await.render()
    }

    pub async fn players(&self) -> Vec<String> {
        self.inner.read().await.players().to_vec()
    }

    pub async fn scores(&self, name: &str) -> Option<Vec<i64>> {
        self.inner.read().await.scores(name).map(<[i64]>::to_vec)
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_LIMIT)
    }
}
