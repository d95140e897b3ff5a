//! Application wiring: builds every layer and hands the result to the UI layer.

use std::{path::PathBuf, sync::Arc};

use reorder_shared::time::{Clock, SystemClock};
use tokio::sync::mpsc;

use crate::{
    domain::{CategoryCatalog, GameRules, RoomFactory, Shuffler},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository,
        scheduler::TokioRoomCleanupScheduler,
    },
    ui::{AppState, DispatcherUseCases, GameDispatcher, Server},
    usecase::{
        CheckGameStatusUseCase, CleanupRoomUseCase, ConnectClientUseCase,
        DisconnectPlayerUseCase, GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase,
        StartRoundUseCase, SubmitOrderUseCase,
    },
};

/// Everything the server needs besides the listen address
pub struct ServerConfig {
    pub rules: GameRules,
    /// Must hold at least `rules.max_rounds` categories
    pub catalog: CategoryCatalog,
    /// Fixed RNG seed, for reproducible shuffles
    pub seed: Option<u64>,
    pub static_dir: Option<PathBuf>,
    pub clock: Arc<dyn Clock>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            catalog: CategoryCatalog::builtin(),
            seed: None,
            static_dir: None,
            clock: Arc::new(SystemClock),
        }
    }
}

/// Build a ready-to-run server.
///
/// Must be called inside a tokio runtime.
pub fn build_server(config: ServerConfig) -> Server {
    let ServerConfig {
        rules,
        catalog,
        seed,
        static_dir,
        clock,
    } = config;

    // 1. Domain services
    let catalog = Arc::new(catalog);
    let shuffler = Arc::new(Shuffler::new(seed));
    let factory = RoomFactory::new(catalog.clone(), shuffler.clone(), clock);

    // 2. Infrastructure
    let repository = Arc::new(InMemoryRoomRepository::new(factory));
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let (expired_tx, expired_rx) = mpsc::unbounded_channel();
    let cleanup_scheduler = Arc::new(TokioRoomCleanupScheduler::new(
        rules.cleanup_delay,
        expired_tx,
    ));

    // 3. UseCases
    let usecases = DispatcherUseCases {
        check_game_status: Arc::new(CheckGameStatusUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        join_room: Arc::new(JoinRoomUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            rules,
        )),
        start_round: Arc::new(StartRoundUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            catalog,
            shuffler,
            rules,
        )),
        submit_order: Arc::new(SubmitOrderUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            cleanup_scheduler.clone(),
            rules,
        )),
        disconnect_player: Arc::new(DisconnectPlayerUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        cleanup_room: Arc::new(CleanupRoomUseCase::new(
            repository.clone(),
            cleanup_scheduler,
            rules,
        )),
    };

    // 4. Dispatcher and shared state
    let (dispatcher, handle) = GameDispatcher::new(usecases, expired_rx);
    let state = AppState {
        connect_client_usecase: Arc::new(ConnectClientUseCase::new(message_pusher)),
        get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
        get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
        dispatcher: handle,
    };

    Server::new(state, dispatcher, static_dir)
}
