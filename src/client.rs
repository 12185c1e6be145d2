use anyhow::Context;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

const API_KEY_VAR: &str = "SPORTS_API_KEY";
const SEARCH_ENGINE: &str = "google";
const SCHEDULE_QUERY: &str = "Serie A schedule";

/// Immutable configuration for the upstream search call, loaded once at
/// startup and injected into the client.
#[derive(Debug, Clone)]
pub struct SerpConfig {
    pub api_key: String,
    pub base_url: String,
}

impl SerpConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{} must be set", API_KEY_VAR))?;
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }
}

#[derive(Debug, Error)]
pub enum SerpError {
    #[error("upstream search request failed: {0}")]
    Unavailable(reqwest::Error),
    #[error("upstream search returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream search response was not valid JSON: {0}")]
    Decode(reqwest::Error),
}

/// Client for the SerpAPI search endpoint. Performs exactly one GET per
/// call, with no retry and no caching between calls.
#[derive(Debug, Clone)]
pub struct SerpClient {
    http: reqwest::Client,
    config: SerpConfig,
}

impl SerpClient {
    pub fn new(config: SerpConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the raw search payload for the fixed "Serie A schedule" query.
    pub async fn fetch_schedule(&self) -> Result<Value, SerpError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", SCHEDULE_QUERY),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(SerpError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SerpError::Status(status));
        }
        response.json().await.map_err(SerpError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use warp::Filter;

    fn config_for(base_url: String) -> SerpConfig {
        SerpConfig {
            api_key: "test-key".to_owned(),
            base_url,
        }
    }

    #[tokio::test]
    async fn sends_engine_query_and_api_key_params() {
        let upstream = warp::path!("search.json")
            .and(warp::query::<HashMap<String, String>>())
            .map(|params: HashMap<String, String>| {
                warp::reply::json(&serde_json::json!({ "params": params }))
            });
        let (addr, server) = warp::serve(upstream).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let client = SerpClient::new(config_for(format!("http://{}/search.json", addr)));
        let raw = client
            .fetch_schedule()
            .await
            .expect("stub upstream should respond");
        assert_eq!(raw["params"]["engine"], "google");
        assert_eq!(raw["params"]["q"], "Serie A schedule");
        assert_eq!(raw["params"]["api_key"], "test-key");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let upstream = warp::any().map(|| {
            warp::reply::with_status("busy", warp::http::StatusCode::SERVICE_UNAVAILABLE)
        });
        let (addr, server) = warp::serve(upstream).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let client = SerpClient::new(config_for(format!("http://{}", addr)));
        match client.fetch_schedule().await {
            Err(SerpError::Status(status)) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_body_maps_to_decode_error() {
        let upstream = warp::any().map(|| "definitely not json");
        let (addr, server) = warp::serve(upstream).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        let client = SerpClient::new(config_for(format!("http://{}", addr)));
        match client.fetch_schedule().await {
            Err(SerpError::Decode(_)) => {}
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_unavailable() {
        // Port 9 (discard) is assumed closed; the connection is refused.
        let client = SerpClient::new(config_for("http://127.0.0.1:9/search.json".to_owned()));
        match client.fetch_schedule().await {
            Err(SerpError::Unavailable(_)) => {}
            other => panic!("expected unavailable error, got {:?}", other),
        }
    }

    #[test]
    fn errors_display_a_non_empty_description() {
        let err = SerpError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.to_string().is_empty());
        assert!(err.to_string().contains("503"));
    }
}
