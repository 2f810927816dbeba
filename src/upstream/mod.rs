//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! route handler (http/handlers.rs)
//!     → client.rs (build URL, attach query params + headers, single GET)
//!     → error.rs (status classification → normalized error)
//!     → decoded JSON payload back to the handler
//! ```
//!
//! # Design Decisions
//! - One pooled reqwest client per process, built at startup
//! - Exactly one upstream attempt per inbound call; no retries, no fallback
//! - Annotated passthrough: unexpected error bodies are truncated to 200
//!   characters and transport-level failures are coerced to status 500

pub mod client;
pub mod error;

pub use client::{QueryParams, UpstreamClient};
pub use error::{UpstreamError, UpstreamResult};
