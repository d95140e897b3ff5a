//! UseCase: 並び順の提出処理
//!
//! 提出された並び順を隠された正解と位置ごとに照合し、結果をルーム全員に配信します。
//! 完全一致ならそのラウンドの勝者となり、ゲームが終了した場合は
//! ルームの削除タイマーを仕掛けます。

use std::sync::Arc;

use crate::domain::{
    GameRules, MessagePusher, PlayerName, RoomCleanupScheduler, RoomId, RoomRepository,
    SubmissionOutcome,
};

use super::{error::SubmitOrderError, notify::broadcast_to_room};

/// 提出処理のユースケース
pub struct SubmitOrderUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    /// 終了したルームの削除予約
    cleanup_scheduler: Arc<dyn RoomCleanupScheduler>,
    rules: GameRules,
}

impl SubmitOrderUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        cleanup_scheduler: Arc<dyn RoomCleanupScheduler>,
        rules: GameRules,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            cleanup_scheduler,
            rules,
        }
    }

    /// 提出を実行
    ///
    /// # Returns
    ///
    /// 照合結果。`SubmissionOutcome::Ignored` の場合は何も配信していない
    pub async fn execute(
        &self,
        room_id: &RoomId,
        player: &PlayerName,
        order: &[String],
    ) -> Result<SubmissionOutcome, SubmitOrderError> {
        let Some(mut room) = self.repository.find(room_id).await else {
            tracing::debug!("Submission for unknown room '{}' dropped", room_id);
            return Ok(SubmissionOutcome::Ignored);
        };

        let outcome = room.submit(player, order, &self.rules);
        if outcome == SubmissionOutcome::Ignored {
            tracing::debug!(
                "Submission from '{}' in room '{}' ignored (phase: {})",
                player,
                room_id,
                room.phase().as_str()
            );
            return Ok(outcome);
        }

        self.repository.save(room.clone()).await?;
        broadcast_to_room(&*self.message_pusher, &room, outcome.events()).await;

        match &outcome {
            SubmissionOutcome::RoundWon(_) => {
                tracing::info!(
                    "'{}' won round {} in room '{}'",
                    player,
                    room.round_index(),
                    room.id
                );
            }
            SubmissionOutcome::GameOver(_) => {
                tracing::info!(
                    "Game over in room '{}'; deleting it in {:?}",
                    room.id,
                    self.rules.cleanup_delay
                );
                self.cleanup_scheduler.schedule(room.id.clone(), room.instance);
            }
            SubmissionOutcome::Scored(_) | SubmissionOutcome::Ignored => {}
        }

        Ok(outcome)
    }
}
