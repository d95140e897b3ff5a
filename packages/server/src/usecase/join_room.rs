//! UseCase: ルーム参加処理
//!
//! ## 処理の流れ
//! 1. 接続が別のルームに着席済みなら拒否
//! 2. ルームを取得（なければ作成）
//! 3. Room::join で着席させる
//! 4. 成功: 保存してルーム全員に stateMulti を配信
//!    失敗: 要求元にのみ errorJoin を返す

use std::sync::Arc;

use crate::domain::{
    ConnectionId, GameEvent, GameRules, JoinRejection, MessagePusher, PlayerName, RoomId,
    RoomRepository,
};

use super::{
    error::JoinRoomError,
    notify::{broadcast_to_room, reply},
};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    rules: GameRules,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        rules: GameRules,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            rules,
        }
    }

    /// 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 着席し、stateMulti を配信した
    /// * `Err(JoinRoomError)` - 拒否した（要求元には errorJoin を送信済み）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        player_name: PlayerName,
    ) -> Result<(), JoinRoomError> {
        // 1. 1 接続 1 ルーム
        if let Some(current) = self.repository.find_by_connection(&connection_id).await
            && current.id != room_id
        {
            let rejection = JoinRejection::AlreadyInAnotherRoom(current.id.into_string());
            return Err(self.reject(connection_id, rejection).await);
        }

        // 2. ルームを取得（なければ作成）
        let mut room = self.repository.get_or_create(&room_id).await;

        // 3. 着席
        let events = match room.join(connection_id, player_name.clone(), &self.rules) {
            Ok(events) => events,
            Err(rejection) => return Err(self.reject(connection_id, rejection).await),
        };

        // 4. 保存して配信
        self.repository.save(room.clone()).await?;
        broadcast_to_room(&*self.message_pusher, &room, &events).await;

        tracing::info!(
            "Player '{}' joined room '{}' ({} players)",
            player_name,
            room.id,
            room.players().len()
        );
        Ok(())
    }

    /// 要求元に errorJoin を返し、対応するエラーを返す
    pub async fn reject(
        &self,
        connection_id: ConnectionId,
        rejection: JoinRejection,
    ) -> JoinRoomError {
        tracing::debug!("Join from '{}' rejected: {}", connection_id, rejection);
        reply(
            &*self.message_pusher,
            &connection_id,
            GameEvent::JoinRejected {
                message: rejection.to_string(),
            },
        )
        .await;
        JoinRoomError::Rejected(rejection)
    }
}
