use std::collections::HashMap;

use crate::errors::ServiceError;
use crate::format::format_thousands;

/// Rounds shown on an empty or short game.
pub const DEFAULT_ROUNDS: usize = 10;

/// Round limit used when none is configured.
pub const DEFAULT_ROUND_LIMIT: usize = 1000;

/// Player order plus each player's per-round scores.
///
/// Every name in `players` has an entry in `scores` and vice versa.
/// No score list grows past `round_limit` entries.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    players: Vec<String>,
    scores: HashMap<String, Vec<i64>>,
    round_limit: usize,
}

/// One grid row: the zero-based round and a cell per player, in player order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub round: usize,
    pub cells: Vec<Option<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotal {
    pub player: String,
    pub total: i64,
    pub display: String,
}

/// Read-only snapshot of the board, shaped for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub players: Vec<String>,
    pub max_rounds: usize,
    pub rows: Vec<ScoreRow>,
    pub totals: Vec<PlayerTotal>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::with_round_limit(DEFAULT_ROUND_LIMIT)
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board that rejects round indices at or above `round_limit`.
    pub fn with_round_limit(round_limit: usize) -> Self {
        Self { players: Vec::new(), scores: HashMap::new(), round_limit }
    }

    /// Register a player. Returns `false` if the name was already taken.
    pub fn add_player(&mut self, name: &str) -> bool {
        if self.scores.contains_key(name) {
            return false;
        }
        self.players.push(name.to_owned());
        self.scores.insert(name.to_owned(), Vec::new());
        true
    }

    /// Record `value` for `name` at `round`, or at the next round when `round` is `None`.
    ///
    /// Skipped rounds are filled with 0. Unknown players are ignored with `Ok(false)`
    /// whatever the round; a known player's round at or above the limit is an error.
    pub fn set_score(
        &mut self,
        name: &str,
        round: Option<usize>,
        value: i64,
    ) -> Result<bool, ServiceError> {
        let limit = self.round_limit;
        let Some(list) = self.scores.get_mut(name) else {
            return Ok(false);
        };
        let round = round.unwrap_or(list.len());
        if round >= limit {
            return Err(ServiceError::round_out_of_range(round, limit));
        }
        if list.len() <= round {
            list.resize(round + 1, 0);
        }
        list[round] = value;
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.players.clear();
        self.scores.clear();
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn scores(&self, name: &str) -> Option<&[i64]> {
        self.scores.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Longest score list, floored at `DEFAULT_ROUNDS`.
    pub fn max_rounds(&self) -> usize {
        self.scores
            .values()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(DEFAULT_ROUNDS)
    }

    pub fn render(&self) -> ScoreView {
        let max_rounds = self.max_rounds();
        let sheets: Vec<&[i64]> = self
            .players
            .iter()
            .map(|p| self.scores(p).unwrap_or(&[]))
            .collect();

        let rows = (0..max_rounds)
            .map(|round| ScoreRow {
                round,
                cells: sheets.iter().map(|s| s.get(round).copied()).collect(),
            })
            .collect();

        let totals = self
            .players
            .iter()
            .zip(&sheets)
            .map(|(player, sheet)| {
                let total = sum_scores(sheet);
                PlayerTotal { player: player.clone(), total, display: format_thousands(total) }
            })
            .collect();

        ScoreView { players: self.players.clone(), max_rounds, rows, totals }
    }
}

fn sum_scores(scores: &[i64]) -> i64 {
    scores.iter().fold(0i64, |acc, &s| acc.saturating_add(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_of(board: &Scoreboard, name: &str) -> Option<i64> {
        board.render().totals.into_iter().find(|t| t.player == name).map(|t| t.total)
    }

    #[test]
    fn duplicate_player_is_ignored() {
        let mut board = Scoreboard::new();
        assert!(board.add_player("alice"));
        assert!(!board.add_player("alice"));
        assert_eq!(board.players(), ["alice".to_string()]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.scores("alice"), Some(&[][..]));
    }

    #[test]
    fn player_order_follows_registration() {
        let mut board = Scoreboard::new();
        for name in ["carol", "alice", "bob", "alice"] {
            board.add_player(name);
        }
        assert_eq!(board.players(), ["carol", "alice", "bob"]);
    }

    #[test]
    fn empty_name_is_accepted() {
        let mut board = Scoreboard::new();
        assert!(board.add_player(""));
        assert_eq!(board.set_score("", None, 100), Ok(true));
        assert_eq!(total_of(&board, ""), Some(100));
    }

    #[test]
    fn set_score_backfills_with_zeros() {
        let mut board = Scoreboard::new();
        board.add_player("p");
        assert_eq!(board.set_score("p", Some(3), 50), Ok(true));
        assert_eq!(board.scores("p"), Some(&[0, 0, 0, 50][..]));
    }

    #[test]
    fn set_score_overwrites_existing_round() {
        let mut board = Scoreboard::new();
        board.add_player("p");
        for (round, value) in [(0, 300), (1, 500), (0, 1000)] {
            board.set_score("p", Some(round), value).unwrap();
        }
        assert_eq!(board.scores("p"), Some(&[1000, 500][..]));
    }

    #[test]
    fn missing_round_appends() {
        let mut board = Scoreboard::new();
        board.add_player("p");
        for value in [50, 0, 300] {
            board.set_score("p", None, value).unwrap();
        }
        assert_eq!(board.scores("p"), Some(&[50, 0, 300][..]));
        assert_eq!(total_of(&board, "p"), Some(350));
    }

    #[test]
    fn unknown_player_score_has_no_effect() {
        let mut board = Scoreboard::new();
        board.add_player("known");
        let before = board.render();
        assert_eq!(board.set_score("ghost", Some(2), 500), Ok(false));
        assert_eq!(board.render(), before);
        assert_eq!(board.scores("ghost"), None);
    }

    #[test]
    fn unknown_player_is_ignored_even_past_the_limit() {
        let mut board = Scoreboard::with_round_limit(5);
        assert_eq!(board.set_score("ghost", Some(500), 1), Ok(false));
        assert_eq!(board.set_score("ghost", Some(usize::MAX), 1), Ok(false));
    }

    #[test]
    fn huge_round_is_rejected_without_growing() {
        let mut board = Scoreboard::new();
        board.add_player("p");
        let err = board.set_score("p", Some(usize::MAX), 1).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(board.set_score("p", Some(DEFAULT_ROUND_LIMIT), 1).is_err());
        assert_eq!(board.scores("p"), Some(&[][..]));
    }

    #[test]
    fn round_limit_applies_to_appends() {
        let mut board = Scoreboard::with_round_limit(2);
        board.add_player("p");
        board.set_score("p", None, 1).unwrap();
        board.set_score("p", Some(1), 2).unwrap();
        assert!(board.set_score("p", None, 3).is_err());
        assert_eq!(board.scores("p"), Some(&[1, 2][..]));
    }

    #[test]
    fn negative_scores_are_stored() {
        let mut board = Scoreboard::new();
        board.add_player("p");
        board.set_score("p", None, -500).unwrap();
        board.set_score("p", None, 200).unwrap();
        assert_eq!(total_of(&board, "p"), Some(-300));
    }

    #[test]
    fn render_empty_board_has_default_rounds() {
        let view = Scoreboard::new().render();
        assert!(view.players.is_empty());
        assert!(view.totals.is_empty());
        assert_eq!(view.max_rounds, DEFAULT_ROUNDS);
        assert_eq!(view.rows.len(), 10);
        assert!(view.rows.iter().all(|r| r.cells.is_empty()));
        assert_eq!(view.rows[9].round, 9);
    }

    #[test]
    fn render_blanks_rounds_past_recorded_length() {
        let mut board = Scoreboard::new();
        board.add_player("a");
        board.add_player("b");
        board.set_score("a", Some(2), 300).unwrap();
        board.set_score("b", None, 50).unwrap();

        let view = board.render();
        assert_eq!(view.rows[0].cells, vec![Some(0), Some(50)]);
        assert_eq!(view.rows[1].cells, vec![Some(0), None]);
        assert_eq!(view.rows[2].cells, vec![Some(300), None]);
        assert_eq!(view.rows[3].cells, vec![None, None]);
    }

    #[test]
    fn render_grows_past_default_rounds() {
        let mut board = Scoreboard::new();
        board.add_player("a");
        board.set_score("a", Some(14), 100).unwrap();
        let view = board.render();
        assert_eq!(view.max_rounds, 15);
        assert_eq!(view.rows.len(), 15);
        assert_eq!(view.rows[14].cells, vec![Some(100)]);
    }

    #[test]
    fn render_totals_are_summed_and_formatted() {
        let mut board = Scoreboard::new();
        board.add_player("a");
        board.add_player("b");
        for s in [50, 0, 300] {
            board.set_score("a", None, s).unwrap();
        }
        for s in [5000, 4000, 1250] {
            board.set_score("b", None, s).unwrap();
        }

        let view = board.render();
        assert_eq!(view.totals[0], PlayerTotal { player: "a".into(), total: 350, display: "350".into() });
        assert_eq!(view.totals[1].total, 10_250);
        assert_eq!(view.totals[1].display, "10,250");
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Scoreboard::new();
        board.add_player("a");
        board.set_score("a", Some(20), 1).unwrap();
        board.reset();

        assert!(board.is_empty());
        assert_eq!(board.scores("a"), None);
        let view = board.render();
        assert!(view.players.is_empty());
        assert_eq!(view.rows.len(), DEFAULT_ROUNDS);
    }
}
