//! UseCase: 切断処理
//!
//! 接続が閉じたら送信先の登録を解除し、着席していたルームからプレイヤーを外して
//! 残りのプレイヤーに stateMulti を配信します。
//! ルームが空になっても削除はしません（削除はゲーム終了後のタイマーのみ）。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository};

use super::{error::DisconnectError, notify::broadcast_to_room};

/// 切断処理のユースケース
pub struct DisconnectPlayerUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPlayerUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(room_id))` - 着席していたルームから外した
    /// * `Ok(None)` - どのルームにも着席していなかった
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Option<RoomId>, DisconnectError> {
        self.message_pusher.unregister_client(&connection_id).await;

        let Some(mut room) = self.repository.find_by_connection(&connection_id).await else {
            tracing::debug!("Client '{}' left without joining a room", connection_id);
            return Ok(None);
        };
        let Some(events) = room.remove_player(&connection_id) else {
            return Ok(None);
        };

        self.repository.save(room.clone()).await?;
        broadcast_to_room(&*self.message_pusher, &room, &events).await;

        tracing::info!(
            "Client '{}' left room '{}' ({} players remain)",
            connection_id,
            room.id,
            room.players().len()
        );
        Ok(Some(room.id))
    }
}
