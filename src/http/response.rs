//! Response shaping for the gateway surface.
//!
//! # Responsibilities
//! - Render every upstream failure as a `{statusCode, message}` body with a
//!   matching HTTP status, never a raw error or stack trace
//! - Clamp collection payloads to the requested result limit
//!
//! # Design Decisions
//! - Successful payloads pass through verbatim except for clamping
//! - Result limits are capped at 100 regardless of what the caller asks for

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::upstream::UpstreamError;

/// Hard cap on the number of collection items returned by limited endpoints.
pub const MAX_RESULT_LIMIT: usize = 100;

/// Normalized error body returned for every failed gateway call.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            status_code,
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Clamp the `data` collection of a successful payload to
/// `min(limit, MAX_RESULT_LIMIT)` items, preserving order.
///
/// Payloads without a `data` array pass through untouched.
pub fn clamp_data(mut payload: Value, limit: usize) -> Value {
    let limit = limit.min(MAX_RESULT_LIMIT);
    if let Some(items) = payload.get_mut("data").and_then(Value::as_array_mut) {
        items.truncate(limit);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clamp_keeps_first_items_in_order() {
        let payload = json!({ "data": (1..=50).collect::<Vec<i64>>() });
        let clamped = clamp_data(payload, 10);
        assert_eq!(clamped["data"], json!((1..=10).collect::<Vec<i64>>()));
    }

    #[test]
    fn test_limit_capped_at_100() {
        let payload = json!({ "data": (1..=120).collect::<Vec<i64>>() });
        let clamped = clamp_data(payload, 500);
        assert_eq!(clamped["data"].as_array().unwrap().len(), 100);
    }

    #[test]
    fn test_shorter_collection_untouched() {
        let payload = json!({ "data": [1, 2, 3] });
        let clamped = clamp_data(payload.clone(), 10);
        assert_eq!(clamped, payload);
    }

    #[test]
    fn test_payload_without_data_array_passes_through() {
        let payload = json!({ "data": { "id": "eth" } });
        assert_eq!(clamp_data(payload.clone(), 5), payload);

        let payload = json!({ "meta": [1, 2, 3] });
        assert_eq!(clamp_data(payload.clone(), 1), payload);
    }

    #[test]
    fn test_error_body_field_names() {
        let body = ErrorBody {
            status_code: 429,
            message: "rate limit exceeded".into(),
        };
        let rendered = serde_json::to_value(&body).unwrap();
        assert_eq!(
            rendered,
            json!({ "statusCode": 429, "message": "rate limit exceeded" })
        );
    }
}
