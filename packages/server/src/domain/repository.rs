//! Room Repository trait 定義
//!
//! ドメイン層が必要とするルームレジストリのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, RepositoryError, Room, RoomId};

/// Room Repository trait
///
/// ルーム ID から Room 状態へのマッピング。作成・取得・削除を担う。
/// 取得系は Room のコピーを返し、変更は `save` で書き戻す。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 既存の Room を返す。存在しなければ新しい Room を作成して登録する
    async fn get_or_create(&self, room_id: &RoomId) -> Room;

    /// Room を取得
    async fn find(&self, room_id: &RoomId) -> Option<Room>;

    /// 指定の接続が参加している Room を取得（最初に見つかったもの）
    async fn find_by_connection(&self, connection_id: &ConnectionId) -> Option<Room>;

    /// 変更済みの Room を書き戻す
    ///
    /// 削除済み、または別インスタンスに置き換わった Room は書き戻さない
    async fn save(&self, room: Room) -> Result<(), RepositoryError>;

    /// Room を削除（冪等）。削除した場合は `true`
    async fn remove(&self, room_id: &RoomId) -> bool;

    /// 全ての Room を ID 順で取得
    async fn list(&self) -> Vec<Room>;
}
