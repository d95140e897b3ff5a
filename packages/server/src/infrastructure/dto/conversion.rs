//! Conversion logic between DTOs and domain entities.

use std::collections::BTreeMap;

use reorder_shared::time::timestamp_to_rfc3339;

use crate::domain::{GameEvent, PlayerName, Room, Scores};
use crate::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto},
    websocket::{PlayerInfo, ServerMessage},
};

fn scores_dto(scores: Scores) -> BTreeMap<String, u32> {
    scores
        .into_iter()
        .map(|(name, points)| (name.into_string(), points))
        .collect()
}

fn names_dto(names: Vec<PlayerName>) -> Vec<String> {
    names.into_iter().map(PlayerName::into_string).collect()
}

fn players_dto(names: Vec<PlayerName>) -> Vec<PlayerInfo> {
    names
        .into_iter()
        .map(|name| PlayerInfo {
            name: name.into_string(),
        })
        .collect()
}

// ========================================
// Domain Event → DTO
// ========================================

impl From<GameEvent> for ServerMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::GameStatus { in_progress } => Self::GameStatus { in_progress },
            GameEvent::JoinRejected { message } => Self::ErrorJoin { message },
            GameEvent::StartRejected { message } => Self::ErrorMulti { message },
            GameEvent::StateSync { players, scores } => Self::StateMulti {
                players: players_dto(players),
                scores: scores_dto(scores),
            },
            GameEvent::RoundStarted {
                items,
                category,
                scores,
                current_round,
                players,
            } => Self::RoundStartedMulti {
                items,
                round_name: category,
                scores: scores_dto(scores),
                current_round,
                players: players_dto(players),
            },
            GameEvent::Feedback {
                player,
                correct_count,
                total,
            } => Self::FeedbackMulti {
                player: player.into_string(),
                correct_count,
                total,
            },
            GameEvent::RoundWon {
                scores,
                winners,
                round_number,
                answer,
            } => Self::RoundWinMulti {
                scores: scores_dto(scores),
                winners: names_dto(winners),
                round_number,
                answer,
            },
            GameEvent::EnableStartNext => Self::EnableStartNext,
            GameEvent::GameEnded {
                scores,
                final_winners,
            } => Self::FinalGameEndMulti {
                scores: scores_dto(scores),
                final_winners: names_dto(final_winners),
            },
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            players: names_dto(room.player_names()),
            rounds_played: room.round_index(),
            phase: room.phase().as_str().to_string(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            players: names_dto(room.player_names()),
            scores: scores_dto(room.scores().clone()),
            rounds_played: room.round_index(),
            phase: room.phase().as_str().to_string(),
            category_order: room.category_order().to_vec(),
            current_category: room.current_category().map(str::to_string),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}
