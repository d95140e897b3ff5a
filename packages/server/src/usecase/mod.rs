//! UseCase 層: ルームとゲーム進行の操作
//!
//! 各ユースケースは Repository からルームを取得し、ドメインの遷移を適用して保存し、
//! 生成されたイベントを MessagePusher で配信します。
//! 呼び出しはディスパッチャが 1 件ずつ直列に行うため、取得から保存までの間に
//! 他の操作が割り込むことはありません。

pub mod check_game_status;
pub mod cleanup_room;
pub mod connect_client;
pub mod disconnect_player;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
mod notify;
pub mod start_round;
pub mod submit_order;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_game_status::CheckGameStatusUseCase;
pub use cleanup_room::CleanupRoomUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::{
    DisconnectError, GetRoomDetailError, JoinRoomError, StartRoundError, SubmitOrderError,
};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use start_round::StartRoundUseCase;
pub use submit_order::SubmitOrderUseCase;
