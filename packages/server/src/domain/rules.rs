//! Tunable game rules.

use std::time::Duration;

/// Rules that decide when a round may start and when a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Rounds per game; the game ends once this many rounds were won
    pub max_rounds: usize,
    /// Score that ends the game immediately
    pub winning_score: u32,
    /// Players needed before a round may start
    pub min_players: usize,
    /// How long a finished room stays readable before it is deleted
    pub cleanup_delay: Duration,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            winning_score: 3,
            min_players: 2,
            cleanup_delay: Duration::from_secs(120),
        }
    }
}
