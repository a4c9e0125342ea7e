//! Score keeping for a single Farkle table.
//! - `scoreboard`: the owned player order and score sheet, plus the rendered view model.
//! - `store`: the lock-guarded handle shared by request handlers.
//! - `format`: display helpers for totals.

pub mod errors;
pub mod format;
pub mod scoreboard;
pub mod store;

pub use scoreboard::{PlayerTotal, ScoreRow, ScoreView, Scoreboard, DEFAULT_ROUNDS, DEFAULT_ROUND_LIMIT};
pub use store::ScoreStore;
