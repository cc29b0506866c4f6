//! kvsock Server Binary
//!
//! Starts the Unix-socket server for kvsock.

use clap::Parser;
use kvsock::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// kvsock Server
#[derive(Parser, Debug)]
#[command(name = "kvsock-server")]
#[command(about = "Minimal key-value store served over a Unix domain socket")]
#[command(version)]
struct Args {
    /// Unix socket path
    #[arg(short, long, default_value = "/tmp/kvstore.sock")]
    socket: String,

    /// Maximum number of distinct keys
    #[arg(short, long, default_value = "100")]
    capacity: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kvsock=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("kvsock Server v{}", kvsock::VERSION);
    tracing::info!("Socket path: {}", args.socket);

    // Build config from args
    let config = Config::builder()
        .socket_path(&args.socket)
        .capacity(args.capacity)
        .build();

    // Bind the endpoint; failure here is fatal
    let mut server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", args.socket, e);
            std::process::exit(1);
        }
    };

    // SIGINT/SIGTERM flip the shutdown flag; the loop notices and cleans up
    let shutdown = server.shutdown_handle();
    if let Err(e) = ctrlc::set_handler(move || {
        tracing::info!("Received termination signal, initiating shutdown...");
        shutdown.shutdown();
    }) {
        tracing::error!("Failed to install signal handler: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
