//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    infrastructure::dto::websocket::ClientMessage,
    ui::{dispatcher::GameCommand, state::AppState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that forwards encoded frames from `rx` to this client's socket.
///
/// The task ends when the socket rejects a write or the pusher drops the sending side.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_client_usecase.execute(tx).await;
    tracing::info!("Client '{}' connected", connection_id);

    let (sender, mut receiver) = socket.split();
    let dispatcher = state.dispatcher.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(text.as_str())
                {
                    Ok(message) => {
                        tracing::debug!("Received from '{}': {:?}", connection_id, message);
                        dispatcher.dispatch(GameCommand::from_message(connection_id, message));
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring malformed frame from '{}': {}", connection_id, e);
                    }
                },
                Message::Close(_) => {
                    tracing::debug!("Client '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to push game events to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state
        .dispatcher
        .dispatch(GameCommand::Disconnect { connection_id });
    tracing::info!("Client '{}' disconnected", connection_id);
}
