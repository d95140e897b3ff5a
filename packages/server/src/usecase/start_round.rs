//! UseCase: ラウンド開始処理
//!
//! 着席人数が足りなければ要求元に errorMulti を返します。
//! ラウンド進行中・ゲーム終了後の開始要求は何もせずに捨てます。

use std::sync::Arc;

use crate::domain::{
    CategoryCatalog, ConnectionId, GameEvent, GameRules, MessagePusher, RoomId, RoomRepository,
    Shuffler,
};

use super::{
    error::StartRoundError,
    notify::{broadcast_to_room, reply},
};

/// ラウンド開始のユースケース
pub struct StartRoundUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    catalog: Arc<CategoryCatalog>,
    shuffler: Arc<Shuffler>,
    rules: GameRules,
}

impl StartRoundUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        catalog: Arc<CategoryCatalog>,
        shuffler: Arc<Shuffler>,
        rules: GameRules,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            catalog,
            shuffler,
            rules,
        }
    }

    /// ラウンド開始を実行
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - ラウンドを開始し、roundStartedMulti を配信した
    /// * `Ok(false)` - 要求を無視した（ルームなし・進行中・ゲーム終了後）
    /// * `Err(StartRoundError)` - 拒否した（要求元には errorMulti を送信済み）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: &RoomId,
    ) -> Result<bool, StartRoundError> {
        let Some(mut room) = self.repository.find(room_id).await else {
            tracing::debug!("Start requested for unknown room '{}'", room_id);
            return Ok(false);
        };

        let events = match room.start_round(&self.catalog, &self.shuffler, &self.rules) {
            Ok(events) => events,
            Err(rejection) => {
                reply(
                    &*self.message_pusher,
                    &connection_id,
                    GameEvent::StartRejected {
                        message: rejection.to_string(),
                    },
                )
                .await;
                return Err(rejection.into());
            }
        };
        if events.is_empty() {
            tracing::debug!(
                "Start for room '{}' ignored (phase: {})",
                room_id,
                room.phase().as_str()
            );
            return Ok(false);
        }

        self.repository.save(room.clone()).await?;
        broadcast_to_room(&*self.message_pusher, &room, &events).await;

        tracing::info!(
            "Round {} started in room '{}' with category '{}'",
            room.round_index() + 1,
            room.id,
            room.current_category().unwrap_or_default()
        );
        Ok(true)
    }
}
