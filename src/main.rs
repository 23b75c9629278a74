//! Fiscal Device Stub Server
//!
//! Answers device-operation requests (shifts, receipts, payments, refunds,
//! X/Z reports) with synthetic, schema-shaped JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                  DEVICE STUB                     │
//!  Client Request  │  ┌──────┐   ┌────────────┐   ┌──────────────┐   │
//!  ────────────────┼─▶│ cors │──▶│ access log │──▶│ route table  │   │
//!                  │  └──────┘   └────────────┘   └──────┬───────┘   │
//!                  │                                     │           │
//!                  │                       ┌─────────────┴────────┐  │
//!                  │                       ▼                      ▼  │
//!                  │              ┌────────────────┐     ┌──────────┐│
//!                  │              │ body parse +   │     │ 404 with ││
//!                  │              │ validation     │     │ routes   ││
//!                  │              └───────┬────────┘     └──────────┘│
//!                  │                      ▼                          │
//!  Client Response │              ┌────────────────┐                 │
//!  ◀───────────────┼──────────────│  generators    │                 │
//!                  │              │ (clock + rand) │                 │
//!                  │              └────────────────┘                 │
//!                  └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use device_stub::config::{load_config, StubConfig};
use device_stub::lifecycle::{wait_for_signal, Shutdown};
use device_stub::observability::init_logging;
use device_stub::HttpServer;

#[derive(Parser)]
#[command(name = "device-stub")]
#[command(about = "Stub HTTP server simulating cash registers and POS terminals", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => StubConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!("device-stub v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        cors = config.cors.enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, stop).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
