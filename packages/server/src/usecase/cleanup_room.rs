//! UseCase: 終了したルームの削除
//!
//! 削除タイマーの満了通知を受けて、ルームを削除します。
//! 満了までの間に同じ ID で作り直されたルームや、まだ終了していないルームは削除しません。

use std::sync::Arc;

use crate::domain::{ExpiredRoom, GameRules, RoomCleanupScheduler, RoomRepository};

/// ルーム削除のユースケース
pub struct CleanupRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    cleanup_scheduler: Arc<dyn RoomCleanupScheduler>,
    rules: GameRules,
}

impl CleanupRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        cleanup_scheduler: Arc<dyn RoomCleanupScheduler>,
        rules: GameRules,
    ) -> Self {
        Self {
            repository,
            cleanup_scheduler,
            rules,
        }
    }

    /// 満了通知を処理し、削除したかどうかを返す
    pub async fn execute(&self, expired: ExpiredRoom) -> bool {
        let Some(room) = self.repository.find(&expired.room_id).await else {
            tracing::debug!("Room '{}' already gone", expired.room_id);
            return false;
        };
        if room.instance != expired.instance {
            tracing::debug!(
                "Room '{}' was recreated; keeping the new instance",
                expired.room_id
            );
            return false;
        }
        if !room.is_terminal(&self.rules) {
            return false;
        }

        let removed = self.repository.remove(&expired.room_id).await;
        self.cleanup_scheduler.cancel(&expired.room_id);
        tracing::info!("Room '{}' deleted after game over", expired.room_id);
        removed
    }
}
