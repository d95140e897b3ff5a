//! Server execution logic.

use std::{future::Future, path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::{
    dispatcher::GameDispatcher,
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Game server
///
/// Owns the shared state and the dispatcher, which is spawned when the server starts.
///
/// # Example
///
/// ```ignore
/// let server = reorder_server::app::build_server(ServerConfig::default());
/// server.run("127.0.0.1".to_string(), 4001).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    dispatcher: GameDispatcher,
    /// Directory served for every path the API does not claim
    static_dir: Option<PathBuf>,
}

impl Server {
    pub fn new(state: AppState, dispatcher: GameDispatcher, static_dir: Option<PathBuf>) -> Self {
        Self {
            state: Arc::new(state),
            dispatcher,
            static_dir,
        }
    }

    fn router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .with_state(state);

        let app = match static_dir {
            Some(dir) => app.fallback_service(ServeDir::new(dir)),
            None => app,
        };

        app.layer(TraceLayer::new_for_http())
    }

    /// Bind to `host:port` and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Game server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server {
            state,
            dispatcher,
            static_dir,
        } = self;

        let dispatcher_task = tokio::spawn(dispatcher.run());
        let app = Self::router(state, static_dir);

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        // Upgraded sockets may still hold dispatcher handles
        dispatcher_task.abort();
        result
    }
}
