//! Normalized upstream error types.

use thiserror::Error;

/// Fixed, provider-agnostic message returned for upstream 429 responses.
pub const RATE_LIMIT_MESSAGE: &str = "rate limit exceeded";

/// Maximum number of characters kept from an unexpected upstream error body.
pub const ERROR_BODY_MAX_CHARS: usize = 200;

/// Errors that can occur while forwarding a request to the upstream provider.
///
/// Every variant maps to exactly one local HTTP status via [`status_code`],
/// so callers surface a uniform `{statusCode, message}` body regardless of
/// where the failure originated.
///
/// [`status_code`]: UpstreamError::status_code
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream returned 429. The upstream body is discarded on purpose.
    #[error("rate limit exceeded")]
    RateLimited,

    /// Upstream returned a non-200 status with a textual body.
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced an HTTP response (DNS, timeout, reset).
    #[error("upstream transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream claimed success but the body was not valid JSON.
    #[error("upstream returned undecodable body: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Local HTTP status mirroring the classified failure.
    pub fn status_code(&self) -> u16 {
        match self {
            UpstreamError::RateLimited => 429,
            UpstreamError::Status { status, .. } => *status,
            UpstreamError::Transport(_) => 500,
            UpstreamError::Decode(_) => 502,
        }
    }

    /// Message presented to local callers.
    pub fn message(&self) -> String {
        match self {
            UpstreamError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            UpstreamError::Status { message, .. } => message.clone(),
            UpstreamError::Transport(e) => e.to_string(),
            UpstreamError::Decode(reason) => reason.clone(),
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Truncate an unexpected error body to [`ERROR_BODY_MAX_CHARS`] characters.
pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_MAX_CHARS).collect()
}
