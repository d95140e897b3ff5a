//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{ConnectClientUseCase, GetRoomDetailUseCase, GetRoomsUseCase};

use super::dispatcher::GameDispatcherHandle;

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// ゲーム操作はすべてディスパッチャ経由で直列に処理する
    pub dispatcher: GameDispatcherHandle,
}
