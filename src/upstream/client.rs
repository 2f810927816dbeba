//! Upstream request forwarding.
//!
//! # Responsibilities
//! - Compose the full upstream URL from the configured base and endpoint path
//! - Attach query parameters and the fixed Accept/User-Agent header pair
//! - Issue a single GET per call through a pooled client
//! - Classify the upstream status into a payload or a normalized error

use std::time::{Duration, Instant};

use reqwest::{header, StatusCode};
use serde_json::Value;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::observability::metrics;
use crate::upstream::error::{truncate_body, UpstreamError, UpstreamResult};

/// Query parameters forwarded to the upstream provider.
///
/// Absent values are omitted rather than sent as empty strings.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a parameter.
    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Attach a parameter only when a value is present.
    pub fn set_opt(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(v) = value {
            self.0.push((key, v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Client for the upstream market-data provider.
///
/// Holds the pooled HTTP client and the fixed request headers. Constructed
/// once at startup from the immutable configuration; never mutated afterwards.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    accept: String,
    user_agent: String,
}

impl UpstreamClient {
    /// Build the client from configuration.
    ///
    /// The request timeout bounds the whole outbound call, so an abandoned
    /// inbound request cannot leak an unbounded upstream request.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            accept: format!("application/json;version={}", upstream.api_version),
            user_agent: upstream.user_agent.clone(),
        })
    }

    /// Forward a GET to the upstream provider and normalize the outcome.
    ///
    /// `endpoint` is a relative path beginning with `/`, already interpolated
    /// with any route parameters. One upstream attempt per call; every failure
    /// path terminates in a single [`UpstreamError`].
    pub async fn forward(&self, endpoint: &str, params: &QueryParams) -> UpstreamResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let start = Instant::now();

        let mut request = self
            .http
            .get(&url)
            .header(header::ACCEPT, &self.accept)
            .header(header::USER_AGENT, &self.user_agent);
        if !params.is_empty() {
            request = request.query(params.as_slice());
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Upstream request failed before a response");
                metrics::record_upstream(0, start);
                return Err(UpstreamError::Transport(e));
            }
        };

        let status = response.status();
        tracing::debug!(
            url = %url,
            params = ?params,
            status = %status,
            "Upstream response"
        );
        metrics::record_upstream(status.as_u16(), start);

        if status == StatusCode::OK {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::RateLimited);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST {
            Err(UpstreamError::Status {
                status: 400,
                message: body,
            })
        } else {
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message: truncate_body(&body),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_omit_absent_values() {
        let params = QueryParams::new()
            .set("limit", 10)
            .set_opt("page", Some(1))
            .set_opt("period", None::<String>);

        assert_eq!(
            params.as_slice(),
            &[("limit", "10".to_string()), ("page", "1".to_string())]
        );
    }

    #[test]
    fn test_empty_query_params() {
        assert!(QueryParams::new().is_empty());
    }
}
