//! Sequential game command dispatcher.
//!
//! Every room mutation goes through one task that handles commands one at a time, so a
//! read-modify-save in a use case never interleaves with another. Cleanup timer expiries
//! are fed into the same loop.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ExpiredRoom, JoinRejection, PlayerName, RoomId},
    infrastructure::dto::websocket::ClientMessage,
    usecase::{
        CheckGameStatusUseCase, CleanupRoomUseCase, DisconnectPlayerUseCase, JoinRoomError,
        JoinRoomUseCase, StartRoundError, StartRoundUseCase, SubmitOrderUseCase,
    },
};

/// A request from one connection, still carrying raw client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    CheckGameStatus {
        connection_id: ConnectionId,
        room_id: String,
    },
    JoinRoom {
        connection_id: ConnectionId,
        room_id: String,
        player_name: String,
    },
    StartRound {
        connection_id: ConnectionId,
        room_id: String,
    },
    SubmitOrder {
        connection_id: ConnectionId,
        room_id: String,
        player_id: String,
        order: Vec<String>,
    },
    Disconnect {
        connection_id: ConnectionId,
    },
}

impl GameCommand {
    pub fn from_message(connection_id: ConnectionId, message: ClientMessage) -> Self {
        match message {
            ClientMessage::CheckGameStatus { room_id } => GameCommand::CheckGameStatus {
                connection_id,
                room_id,
            },
            ClientMessage::JoinRoom {
                room_id,
                player_name,
            } => GameCommand::JoinRoom {
                connection_id,
                room_id,
                player_name,
            },
            ClientMessage::StartRound { room_id } => GameCommand::StartRound {
                connection_id,
                room_id,
            },
            ClientMessage::SubmitOrder {
                room_id,
                player_id,
                order,
            } => GameCommand::SubmitOrder {
                connection_id,
                room_id,
                player_id,
                order,
            },
        }
    }
}

/// Use cases driven by the dispatcher
pub struct DispatcherUseCases {
    pub check_game_status: Arc<CheckGameStatusUseCase>,
    pub join_room: Arc<JoinRoomUseCase>,
    pub start_round: Arc<StartRoundUseCase>,
    pub submit_order: Arc<SubmitOrderUseCase>,
    pub disconnect_player: Arc<DisconnectPlayerUseCase>,
    pub cleanup_room: Arc<CleanupRoomUseCase>,
}

/// Sending side of the dispatcher, shared by every connection
#[derive(Debug, Clone)]
pub struct GameDispatcherHandle {
    sender: mpsc::UnboundedSender<GameCommand>,
}

impl GameDispatcherHandle {
    /// Queue `command`; commands are handled in the order they were queued.
    pub fn dispatch(&self, command: GameCommand) {
        if self.sender.send(command).is_err() {
            tracing::warn!("Game dispatcher is not running; command dropped");
        }
    }
}

pub struct GameDispatcher {
    receiver: mpsc::UnboundedReceiver<GameCommand>,
    expired: mpsc::UnboundedReceiver<ExpiredRoom>,
    usecases: DispatcherUseCases,
}

impl GameDispatcher {
    pub fn new(
        usecases: DispatcherUseCases,
        expired: mpsc::UnboundedReceiver<ExpiredRoom>,
    ) -> (Self, GameDispatcherHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                receiver,
                expired,
                usecases,
            },
            GameDispatcherHandle { sender },
        )
    }

    /// Handle commands until every handle has been dropped.
    pub async fn run(mut self) {
        tracing::debug!("Game dispatcher started");
        loop {
            tokio::select! {
                command = self.receiver.recv() => {
                    let Some(command) = command else { break };
                    self.handle(command).await;
                }
                Some(expired) = self.expired.recv() => {
                    self.usecases.cleanup_room.execute(expired).await;
                }
            }
        }
        tracing::debug!("Game dispatcher stopped");
    }

    async fn handle(&self, command: GameCommand) {
        match command {
            GameCommand::CheckGameStatus {
                connection_id,
                room_id,
            } => match RoomId::new(room_id) {
                Ok(room_id) => {
                    self.usecases
                        .check_game_status
                        .execute(connection_id, &room_id)
                        .await;
                }
                Err(_) => {
                    self.usecases
                        .check_game_status
                        .reply(connection_id, false)
                        .await;
                }
            },
            GameCommand::JoinRoom {
                connection_id,
                room_id,
                player_name,
            } => {
                let input = RoomId::new(room_id)
                    .and_then(|room_id| Ok((room_id, PlayerName::new(player_name)?)));
                let (room_id, player_name) = match input {
                    Ok(input) => input,
                    Err(e) => {
                        self.usecases
                            .join_room
                            .reject(connection_id, JoinRejection::InvalidInput(e))
                            .await;
                        return;
                    }
                };
                if let Err(JoinRoomError::Repository(e)) = self
                    .usecases
                    .join_room
                    .execute(connection_id, room_id, player_name)
                    .await
                {
                    tracing::warn!("Failed to join: {}", e);
                }
            }
            GameCommand::StartRound {
                connection_id,
                room_id,
            } => {
                let Ok(room_id) = RoomId::new(room_id) else {
                    tracing::debug!("Start with invalid room id from '{}'", connection_id);
                    return;
                };
                if let Err(StartRoundError::Repository(e)) = self
                    .usecases
                    .start_round
                    .execute(connection_id, &room_id)
                    .await
                {
                    tracing::warn!("Failed to start round: {}", e);
                }
            }
            GameCommand::SubmitOrder {
                connection_id,
                room_id,
                player_id,
                order,
            } => {
                let (Ok(room_id), Ok(player)) = (RoomId::new(room_id), PlayerName::new(player_id))
                else {
                    tracing::debug!("Malformed submission from '{}' dropped", connection_id);
                    return;
                };
                if let Err(e) = self
                    .usecases
                    .submit_order
                    .execute(&room_id, &player, &order)
                    .await
                {
                    tracing::warn!("Failed to record submission: {}", e);
                }
            }
            GameCommand::Disconnect { connection_id } => {
                if let Err(e) = self
                    .usecases
                    .disconnect_player
                    .execute(connection_id)
                    .await
                {
                    tracing::warn!("Failed to disconnect '{}': {}", connection_id, e);
                }
            }
        }
    }
}
