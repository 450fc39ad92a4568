use clap::Parser;
use std::io;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load().apply_args(&args);

    // RUST_LOG, when set, refines the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(true)
        .init();

    log::info!("🔑 Starting password generator");
    log::debug!("Loaded config: {:?}", config);

    api::start_server(config).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })
}
