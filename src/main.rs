//! GeckoTerminal Market-Data Gateway
//!
//! A pass-through HTTP gateway that republishes a subset of the GeckoTerminal
//! public API under a simplified local route set.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │                  GATEWAY                    │
//!                      │                                             │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌────────┐ │
//!     ─────────────────┼─▶│  http   │───▶│ handlers │───▶│upstream│─┼──▶ GeckoTerminal
//!                      │  │ server  │    │ (routes) │    │forward │ │     API v2
//!     Client Response  │  └─────────┘    └──────────┘    └────────┘ │
//!     ◀────────────────┼── clamped JSON or {statusCode, message} ───┤
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐ │
//!                      │  │        Cross-Cutting Concerns          │ │
//!                      │  │   config    logging    metrics         │ │
//!                      │  └───────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use gecko_gateway::config::load_config;
use gecko_gateway::http::HttpServer;
use gecko_gateway::observability::{logging, metrics};
use gecko_gateway::upstream::UpstreamClient;

#[derive(Parser)]
#[command(name = "gecko-gateway")]
#[command(about = "HTTP gateway for the GeckoTerminal public API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        api_version = %config.upstream.api_version,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let upstream = UpstreamClient::new(&config.upstream, &config.timeouts)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config, upstream);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
