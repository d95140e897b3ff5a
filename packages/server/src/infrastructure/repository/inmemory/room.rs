//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! BTreeMap をインメモリのルームレジストリとして使用します（プロセス再起動で消える）。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, RepositoryError, Room, RoomFactory, RoomId, RoomRepository};

/// インメモリ Room Repository 実装
///
/// ルーム ID 順に並ぶ BTreeMap を保持し、未知の ID に対しては `RoomFactory` で
/// 新しい Room を作成します。
pub struct InMemoryRoomRepository {
    /// ルーム ID → Room
    rooms: Mutex<BTreeMap<RoomId, Room>>,
    /// 新規ルームの生成器
    factory: RoomFactory,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(factory: RoomFactory) -> Self {
        Self {
            rooms: Mutex::new(BTreeMap::new()),
            factory,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn get_or_create(&self, room_id: &RoomId) -> Room {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room_id.clone())
            .or_insert_with(|| {
                tracing::info!("Room '{}' created", room_id);
                self.factory.create(room_id.clone())
            })
            .clone()
    }

    async fn find(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn find_by_connection(&self, connection_id: &ConnectionId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms
            .values()
            .find(|room| room.has_connection(connection_id))
            .cloned()
    }

    async fn save(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        match rooms.get_mut(&room.id) {
            None => Err(RepositoryError::RoomNotFound(room.id.into_string())),
            Some(stored) if stored.instance != room.instance => {
                Err(RepositoryError::StaleRoom(room.id.into_string()))
            }
            Some(stored) => {
                *stored = room;
                Ok(())
            }
        }
    }

    async fn remove(&self, room_id: &RoomId) -> bool {
        let mut rooms = self.rooms.lock().await;
        rooms.remove(room_id).is_some()
    }

    async fn list(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }
}
