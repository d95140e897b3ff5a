//! UseCase: クライアント接続処理
//!
//! WebSocket 接続ごとに ConnectionId を払い出し、MessagePusher に送信先として登録します。
//! ルームへの参加は joinRoom を受け取るまで行いません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 新しい接続を登録し、払い出した ConnectionId を返す
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
        tracing::debug!("Client '{}' connected", connection_id);
        connection_id
    }
}
