//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all gateway routes
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub config: Arc<GatewayConfig>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and upstream client.
    pub fn new(config: GatewayConfig, upstream: UpstreamClient) -> Self {
        let state = AppState {
            upstream: Arc::new(upstream),
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/networks", get(handlers::networks))
            .route("/networks/trending_pools", get(handlers::trending_pools))
            .route("/networks/{network}/dexes", get(handlers::network_dexes))
            .route(
                "/networks/{network}/trending_pools",
                get(handlers::network_trending_pools),
            )
            .route("/networks/{network}/pools", get(handlers::network_pools))
            .route("/networks/{network}/tokens", get(handlers::network_tokens))
            .route(
                "/networks/{network}/tokens/{address}",
                get(handlers::token_details),
            )
            .route(
                "/networks/{network}/tokens/{address}/pools",
                get(handlers::token_pools),
            )
            .route(
                "/simple/networks/{network}/token_price/{addresses}",
                get(handlers::token_prices),
            )
            .route("/search/pools", get(handlers::search_pools))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
