//! UseCase: ゲーム状態の問い合わせ
//!
//! 参加前のクライアントが、指定ルームでラウンドが進行中かどうかを確認します。
//! 存在しないルームは「進行中でない」として扱います（ルームは作成しません）。

use std::sync::Arc;

use crate::domain::{ConnectionId, GameEvent, MessagePusher, RoomId, RoomRepository};

use super::notify::reply;

/// ゲーム状態問い合わせのユースケース
pub struct CheckGameStatusUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl CheckGameStatusUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 問い合わせ元にのみ gameStatus を返す
    ///
    /// # Returns
    ///
    /// 返信した in_progress の値
    pub async fn execute(&self, connection_id: ConnectionId, room_id: &RoomId) -> bool {
        let in_progress = self
            .repository
            .find(room_id)
            .await
            .is_some_and(|room| room.is_game_started());

        self.reply(connection_id, in_progress).await;
        in_progress
    }

    /// ルームを引かずに返信する（不正なルーム ID など）
    pub async fn reply(&self, connection_id: ConnectionId, in_progress: bool) {
        reply(
            &*self.message_pusher,
            &connection_id,
            GameEvent::GameStatus { in_progress },
        )
        .await;
    }
}
