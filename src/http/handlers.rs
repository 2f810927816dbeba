//! Route handlers for the public gateway surface.
//!
//! Each handler is a thin leaf: it interpolates route parameters into the
//! upstream endpoint path, forwards through the shared upstream client, and
//! optionally clamps the result collection. All error handling lives in the
//! upstream subsystem.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::response::clamp_data;
use crate::http::server::AppState;
use crate::upstream::{QueryParams, UpstreamResult};

/// Default number of items for result-limited endpoints.
const DEFAULT_LIMIT: usize = 10;

/// Query parameters accepted by listing endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub page: Option<u32>,
    pub period: Option<String>,
}

/// Query parameters accepted by pool search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub limit: Option<usize>,
    pub page: Option<u32>,
}

/// Static liveness payload returned by the root route.
#[derive(Debug, Serialize)]
pub struct Liveness {
    pub message: &'static str,
    pub version: &'static str,
    pub api_version: String,
}

/// `GET /` — liveness probe.
pub async fn home(State(state): State<AppState>) -> Json<Liveness> {
    Json(Liveness {
        message: "GeckoTerminal gateway is running",
        version: env!("CARGO_PKG_VERSION"),
        api_version: state.config.upstream.api_version.clone(),
    })
}

/// `GET /networks` — list supported networks.
pub async fn networks(State(state): State<AppState>) -> UpstreamResult<Json<Value>> {
    state
        .upstream
        .forward("/networks", &QueryParams::new())
        .await
        .map(Json)
}

/// `GET /networks/{network}/dexes` — list DEXes on a network.
pub async fn network_dexes(
    State(state): State<AppState>,
    Path(network): Path<String>,
) -> UpstreamResult<Json<Value>> {
    state
        .upstream
        .forward(&format!("/networks/{network}/dexes"), &QueryParams::new())
        .await
        .map(Json)
}

/// `GET /networks/trending_pools` — trending pools across all networks.
pub async fn trending_pools(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> UpstreamResult<Json<Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let query = QueryParams::new()
        .set("limit", limit)
        .set_opt("page", params.page)
        .set_opt("period", params.period);
    let payload = state.upstream.forward("/networks/trending_pools", &query).await?;
    Ok(Json(clamp_data(payload, limit)))
}

/// `GET /networks/{network}/trending_pools` — trending pools on one network.
pub async fn network_trending_pools(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<ListParams>,
) -> UpstreamResult<Json<Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let query = QueryParams::new()
        .set("limit", limit)
        .set_opt("page", params.page)
        .set_opt("period", params.period);
    let payload = state
        .upstream
        .forward(&format!("/networks/{network}/trending_pools"), &query)
        .await?;
    Ok(Json(clamp_data(payload, limit)))
}

/// `GET /networks/{network}/pools` — top pools on a network.
pub async fn network_pools(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<ListParams>,
) -> UpstreamResult<Json<Value>> {
    let query = QueryParams::new()
        .set_opt("limit", params.limit)
        .set_opt("page", params.page);
    let payload = state
        .upstream
        .forward(&format!("/networks/{network}/pools"), &query)
        .await?;
    Ok(Json(match params.limit {
        Some(limit) => clamp_data(payload, limit),
        None => payload,
    }))
}

/// `GET /networks/{network}/tokens` — top tokens on a network.
pub async fn network_tokens(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<ListParams>,
) -> UpstreamResult<Json<Value>> {
    let query = QueryParams::new()
        .set_opt("limit", params.limit)
        .set_opt("page", params.page);
    let payload = state
        .upstream
        .forward(&format!("/networks/{network}/tokens"), &query)
        .await?;
    Ok(Json(match params.limit {
        Some(limit) => clamp_data(payload, limit),
        None => payload,
    }))
}

/// `GET /networks/{network}/tokens/{address}` — token details.
pub async fn token_details(
    State(state): State<AppState>,
    Path((network, address)): Path<(String, String)>,
) -> UpstreamResult<Json<Value>> {
    state
        .upstream
        .forward(
            &format!("/networks/{network}/tokens/{address}"),
            &QueryParams::new(),
        )
        .await
        .map(Json)
}

/// `GET /networks/{network}/tokens/{address}/pools` — pools holding a token.
pub async fn token_pools(
    State(state): State<AppState>,
    Path((network, address)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> UpstreamResult<Json<Value>> {
    let query = QueryParams::new()
        .set_opt("limit", params.limit)
        .set_opt("page", params.page);
    let payload = state
        .upstream
        .forward(&format!("/networks/{network}/tokens/{address}/pools"), &query)
        .await?;
    Ok(Json(match params.limit {
        Some(limit) => clamp_data(payload, limit),
        None => payload,
    }))
}

/// `GET /simple/networks/{network}/token_price/{addresses}` — USD prices for
/// a comma-separated list of token addresses.
pub async fn token_prices(
    State(state): State<AppState>,
    Path((network, addresses)): Path<(String, String)>,
) -> UpstreamResult<Json<Value>> {
    state
        .upstream
        .forward(
            &format!("/simple/networks/{network}/token_price/{addresses}"),
            &QueryParams::new(),
        )
        .await
        .map(Json)
}

/// `GET /search/pools` — search pools by free-text query.
pub async fn search_pools(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> UpstreamResult<Json<Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let query = QueryParams::new()
        .set("query", params.query)
        .set("limit", limit)
        .set_opt("page", params.page);
    let payload = state.upstream.forward("/search/pools", &query).await?;
    Ok(Json(clamp_data(payload, limit)))
}
