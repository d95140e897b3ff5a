//! WebSocket frame DTOs.
//!
//! Every frame is a JSON object tagged by `type`, carrying the event name used by the
//! browser client (`joinRoom`, `stateMulti`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frames sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    CheckGameStatus {
        room_id: String,
    },
    JoinRoom {
        room_id: String,
        player_name: String,
    },
    StartRound {
        room_id: String,
    },
    SubmitOrder {
        room_id: String,
        player_id: String,
        #[serde(default)]
        order: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
}

/// Frames sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    GameStatus {
        in_progress: bool,
    },
    ErrorJoin {
        message: String,
    },
    ErrorMulti {
        message: String,
    },
    StateMulti {
        players: Vec<PlayerInfo>,
        scores: BTreeMap<String, u32>,
    },
    RoundStartedMulti {
        items: Vec<String>,
        round_name: String,
        scores: BTreeMap<String, u32>,
        current_round: usize,
        players: Vec<PlayerInfo>,
    },
    FeedbackMulti {
        player: String,
        correct_count: usize,
        total: usize,
    },
    RoundWinMulti {
        scores: BTreeMap<String, u32>,
        winners: Vec<String>,
        round_number: usize,
        answer: Vec<String>,
    },
    EnableStartNext,
    FinalGameEndMulti {
        scores: BTreeMap<String, u32>,
        final_winners: Vec<String>,
    },
}
