//! Rust client SDK for the GeckoTerminal gateway.

pub mod client;

pub use client::{GatewayClient, Liveness};
