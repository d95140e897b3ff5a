//! Domain layer: the room/game state machine and the ports it needs.

pub mod catalog;
pub mod cleanup;
pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod message_pusher;
pub mod repository;
pub mod rules;
pub mod shuffle;
pub mod value_object;

pub use catalog::{Category, CategoryCatalog};
pub use cleanup::{ExpiredRoom, RoomCleanupScheduler};
pub use entity::{Player, Room, RoomPhase, Submission, SubmissionOutcome, count_correct};
pub use error::{
    CatalogError, JoinRejection, MessagePushError, RepositoryError, StartRoundRejection,
    ValueObjectError,
};
pub use event::{GameEvent, Scores};
pub use factory::RoomFactory;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::RoomRepository;
pub use rules::GameRules;
pub use shuffle::Shuffler;
pub use value_object::{ConnectionId, PlayerName, RoomId, RoomInstanceId, Timestamp};

#[cfg(test)]
pub use cleanup::MockRoomCleanupScheduler;
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
#[cfg(test)]
pub use repository::MockRoomRepository;
