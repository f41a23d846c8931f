//! `Taskboard` development server -- in-memory stand-in for the task service.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 127.0.0.1:3000
//! cargo run --bin taskboard-devserver
//!
//! # Run on custom address
//! cargo run --bin taskboard-devserver -- --bind 0.0.0.0:8080
//!
//! # Or via environment variable
//! TASKBOARD_DEVSERVER_ADDR=127.0.0.1:8080 cargo run --bin taskboard-devserver
//! ```

use std::sync::Arc;

use clap::Parser;
use taskboard_devserver::config::{DevServerCliArgs, DevServerConfig};
use taskboard_devserver::server;
use taskboard_devserver::store::TaskStore;

#[tokio::main]
async fn main() {
    let cli = DevServerCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match DevServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskboard dev server");

    match server::start_server_with_store(&config.bind_addr, Arc::new(TaskStore::new())).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "dev server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "dev server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start dev server");
            std::process::exit(1);
        }
    }
}
