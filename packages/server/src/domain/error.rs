//! Domain error types.

use thiserror::Error;

/// Errors raised while constructing value objects from client input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("room id must not be empty")]
    RoomIdEmpty,

    #[error("room id must be at most {0} characters")]
    RoomIdTooLong(usize),

    #[error("player name must not be empty")]
    PlayerNameEmpty,

    #[error("player name must be at most {0} characters")]
    PlayerNameTooLong(usize),
}

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,

    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has no items")]
    EmptyCategory(String),

    #[error("category '{name}' has {actual} items, expected {expected}")]
    ItemCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("catalog has {available} categories but a game needs {required}")]
    NotEnoughCategories { available: usize, required: usize },
}

/// Room registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    /// The stored room was replaced by a newer incarnation while the caller held a copy.
    #[error("room '{0}' was replaced by a newer instance")]
    StaleRoom(String),
}

/// Message push errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode message: {0}")]
    EncodeFailed(String),
}

/// Reasons a join request is refused; surfaced to the requester as `errorJoin`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRejection {
    #[error("The round has already started; you cannot join right now.")]
    RoundInProgress,

    #[error("This game is over; the room will reopen shortly.")]
    GameOver,

    #[error("The name '{0}' is already taken in this room.")]
    NameTaken(String),

    #[error("You are already playing in room '{0}'.")]
    AlreadyInAnotherRoom(String),

    #[error("{0}")]
    InvalidInput(#[from] ValueObjectError),
}

/// Reasons a round start is refused; surfaced to the requester as `errorMulti`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartRoundRejection {
    #[error("At least {required} players are needed to start the round.")]
    NotEnoughPlayers { required: usize },
}
