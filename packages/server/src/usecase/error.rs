//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{JoinRejection, RepositoryError, StartRoundRejection};

/// 参加処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("join rejected: {0}")]
    Rejected(#[from] JoinRejection),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ラウンド開始処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartRoundError {
    #[error("round start rejected: {0}")]
    Rejected(#[from] StartRoundRejection),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 提出処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitOrderError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 切断処理のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("room not found")]
    RoomNotFound,
}
