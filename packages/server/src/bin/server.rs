//! Reorder game server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin reorder-server
//! cargo run --bin reorder-server -- --host 0.0.0.0 --port 4001 --static-dir ./public
//! ```

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use reorder_server::{
    app::{ServerConfig, build_server},
    domain::{CategoryCatalog, GameRules},
    infrastructure::catalog_file::load_catalog,
};
use reorder_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "reorder-server")]
#[command(about = "Multiplayer image ordering game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "4001")]
    port: u16,

    /// Directory of static client files served on unmatched paths
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// JSON category catalog; the built-in catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for category and item shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = 5)]
    max_rounds: usize,

    /// Score that ends the game early
    #[arg(long, default_value_t = 3)]
    winning_score: u32,

    /// Players needed to start a round
    #[arg(long, default_value_t = 2)]
    min_players: usize,

    /// Seconds a finished room is kept before it is deleted
    #[arg(long, default_value_t = 120)]
    cleanup_delay_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let rules = GameRules {
        max_rounds: args.max_rounds,
        winning_score: args.winning_score,
        min_players: args.min_players,
        cleanup_delay: Duration::from_secs(args.cleanup_delay_secs),
    };

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path, rules.max_rounds)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e)),
        None => CategoryCatalog::builtin()
            .for_rounds(rules.max_rounds)
            .map_err(|e| format!("built-in catalog: {}", e)),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Catalog loaded: {} categories, {} items each",
        catalog.len(),
        catalog.items_per_category()
    );

    let server = build_server(ServerConfig {
        rules,
        catalog,
        seed: args.seed,
        static_dir: args.static_dir,
        ..ServerConfig::default()
    });
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
