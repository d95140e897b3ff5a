//! Events the game emits towards clients.
//!
//! Room broadcasts are produced by [`Room`](super::Room) transitions; the unicast replies
//! (`GameStatus`, `JoinRejected`, `StartRejected`) are produced by the use cases.

use std::collections::BTreeMap;

use super::PlayerName;

pub type Scores = BTreeMap<PlayerName, u32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Reply to a status check
    GameStatus { in_progress: bool },
    /// Join refused; sent to the requester only
    JoinRejected { message: String },
    /// Round start refused; sent to the requester only
    StartRejected { message: String },
    /// Membership and score sync
    StateSync {
        players: Vec<PlayerName>,
        scores: Scores,
    },
    /// A round began. The answer is deliberately absent.
    RoundStarted {
        items: Vec<String>,
        category: String,
        scores: Scores,
        current_round: usize,
        players: Vec<PlayerName>,
    },
    Feedback {
        player: PlayerName,
        correct_count: usize,
        total: usize,
    },
    RoundWon {
        scores: Scores,
        winners: Vec<PlayerName>,
        round_number: usize,
        answer: Vec<String>,
    },
    EnableStartNext,
    GameEnded {
        scores: Scores,
        final_winners: Vec<PlayerName>,
    },
}
