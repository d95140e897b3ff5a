//! HTTP API response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub players: Vec<String>,
    pub rounds_played: usize,
    pub phase: String,
    pub created_at: String,
}

/// Room detail. The current answer is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub players: Vec<String>,
    pub scores: BTreeMap<String, u32>,
    pub rounds_played: usize,
    pub phase: String,
    pub category_order: Vec<String>,
    pub current_category: Option<String>,
    pub created_at: String,
}
