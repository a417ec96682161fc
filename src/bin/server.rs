//! Cadastro Server Binary
//!
//! Starts the HTTP server for Cadastro.

use std::sync::Arc;

use cadastro::{http, Config, IdStrategy, Registry};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Cadastro Server
#[derive(Parser, Debug)]
#[command(name = "cadastro-server")]
#[command(about = "Record-management HTTP service backed by a JSON file")]
#[command(version)]
struct Args {
    /// JSON file holding the records
    #[arg(short, long, default_value = "./data/users.json")]
    data_file: String,

    /// Directory of static assets
    #[arg(short, long, default_value = "./public")]
    public_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    listen: String,

    /// Id strategy for new records: sequential or uuid
    #[arg(short, long, default_value = "sequential")]
    id_strategy: IdStrategy,

    /// Fail instead of creating the data file when it is missing
    #[arg(long)]
    no_create: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cadastro=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Cadastro Server v{}", cadastro::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .data_file(&args.data_file)
        .public_dir(&args.public_dir)
        .listen_addr(&args.listen)
        .id_strategy(args.id_strategy)
        .create_if_missing(!args.no_create)
        .build();

    let registry = match Registry::open(&config) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            tracing::error!("Failed to open registry: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Id strategy: {}", registry.id_strategy());

    if let Err(e) = http::serve(&config, registry).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
