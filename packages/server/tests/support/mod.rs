//! Helpers shared by the integration tests: an in-process server and a WebSocket client.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use reorder_server::{
    app::{ServerConfig, build_server},
    domain::{Category, CategoryCatalog, GameRules},
};
use serde_json::Value;
use tokio::{net::TcpStream, sync::oneshot};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A server running on an ephemeral port; shut down on drop
pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn spawn_server(config: ServerConfig) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = build_server(config);
    tokio::spawn(async move {
        server
            .serve(listener, async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    TestServer {
        addr,
        _shutdown: shutdown_tx,
    }
}

/// Two-item categories: the hidden answer is either the dealt order or its reverse.
pub fn small_catalog(rounds: usize) -> CategoryCatalog {
    let categories = (0..rounds)
        .map(|i| Category::new(format!("c{i}"), vec![format!("c{i}/a"), format!("c{i}/b")]))
        .collect();
    CategoryCatalog::new(categories, rounds).unwrap()
}

/// A short game: two wins end it, finished rooms vanish after `cleanup_delay`.
pub fn quick_config(cleanup_delay: Duration) -> ServerConfig {
    ServerConfig {
        rules: GameRules {
            max_rounds: 3,
            winning_score: 2,
            min_players: 2,
            cleanup_delay,
        },
        catalog: small_catalog(3),
        seed: Some(7),
        ..ServerConfig::default()
    }
}

pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    pub async fn connect(server: &TestServer) -> Self {
        let (stream, _) = connect_async(server.ws_url()).await.unwrap();
        Self { stream }
    }

    pub async fn send(&mut self, frame: Value) {
        self.stream
            .send(Message::Text(frame.to_string().into()))
            .await
            .unwrap();
    }

    /// Next JSON frame; panics after a timeout
    pub async fn recv(&mut self) -> Value {
        loop {
            let message = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("timed out waiting for a frame")
                .expect("connection closed")
                .unwrap();
            if let Message::Text(text) = message {
                return serde_json::from_str(text.as_str()).unwrap();
            }
        }
    }

    /// Next frame, asserting its `type`
    pub async fn expect(&mut self, frame_type: &str) -> Value {
        let frame = self.recv().await;
        assert_eq!(frame["type"], frame_type, "unexpected frame: {frame}");
        frame
    }

    /// True if no frame arrives within `wait`
    pub async fn is_quiet(&mut self, wait: Duration) -> bool {
        tokio::time::timeout(wait, self.stream.next()).await.is_err()
    }

    pub async fn close(mut self) {
        self.stream.close(None).await.unwrap();
    }
}

pub fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

pub fn player_names(frame: &Value) -> Vec<String> {
    frame["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
