//! GeckoTerminal Market-Data Gateway Library

pub mod config;
pub mod http;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use upstream::{UpstreamClient, UpstreamError};
