use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Liveness payload returned by the gateway root route.
#[derive(Debug, Deserialize)]
pub struct Liveness {
    pub message: String,
    pub version: String,
    pub api_version: String,
}

/// Thin client for the gateway's public surface.
pub struct GatewayClient {
    client: Client,
    gateway_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check the gateway is up and see which upstream API version it speaks.
    pub async fn liveness(&self) -> Result<Liveness, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/", self.gateway_url))
            .send()
            .await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    /// List supported networks.
    pub async fn networks(&self) -> Result<Value, Box<dyn std::error::Error>> {
        self.get_json("/networks", &[]).await
    }

    /// Trending pools, optionally scoped to one network.
    pub async fn trending_pools(
        &self,
        network: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let path = match network {
            Some(n) => format!("/networks/{}/trending_pools", n),
            None => "/networks/trending_pools".to_string(),
        };
        let mut query = Vec::new();
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        self.get_json(&path, &query).await
    }

    /// Search pools by free-text query.
    pub async fn search_pools(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let mut params = vec![("query", query.to_string())];
        if let Some(l) = limit {
            params.push(("limit", l.to_string()));
        }
        self.get_json("/search/pools", &params).await
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}{}", self.gateway_url, path))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("gateway returned status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }
}
