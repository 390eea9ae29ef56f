//! API Client: the single point of entry for all calls to the upstream jobs API.
//!
//! ARCHITECTURAL RULE: No other module may issue HTTP requests to the jobs API.
//!
//! Every call is one-shot: no retries, no caching, no de-duplication. Each call
//! runs under a fixed client-side timeout; when it elapses the in-flight request
//! is dropped and the call fails with `ApiError::Timeout`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::endpoints;
use crate::models::job::{Job, Recommendation, RecommendationRequest};
use crate::models::stats::{AdminStats, StatsSnapshot};

pub mod fallback;

/// A query parameter as sent upstream. List filters repeat their key.
pub type QueryPair = (&'static str, String);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL. Query pairs are appended only when there
    /// are any, so an empty filter set produces a URL with no `?` at all.
    pub fn endpoint_url(&self, path: &str, query: &[QueryPair]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET /api/jobs/stats
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let url = self.endpoint_url(endpoints::STATS, &[])?;
        self.execute(self.client.get(url)).await
    }

    /// GET /api/admin/stats
    pub async fn fetch_admin_stats(&self) -> Result<AdminStats, ApiError> {
        let url = self.endpoint_url(endpoints::ADMIN_STATS, &[])?;
        self.execute(self.client.get(url)).await
    }

    /// GET /api/jobs?keyword=..&experience_level=..
    pub async fn search_jobs(&self, query: &[QueryPair]) -> Result<Vec<Job>, ApiError> {
        let url = self.endpoint_url(endpoints::JOBS_SEARCH, query)?;
        self.execute(self.client.get(url)).await
    }

    /// POST /api/jobs/recommendation with `user_preferences: null`.
    pub async fn recommend(&self, job_id: &str) -> Result<Recommendation, ApiError> {
        let url = self.endpoint_url(endpoints::RECOMMENDATION, &[])?;
        let body = RecommendationRequest {
            job_id,
            user_preferences: None,
        };
        self.execute(self.client.post(url).json(&body)).await
    }

    /// GET /api/admin/health
    pub async fn upstream_health(&self) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoints::ADMIN_HEALTH, &[])?;
        self.execute(self.client.get(url)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        match tokio::time::timeout(self.timeout, send_once(request)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(self.timeout)),
        }
    }
}

async fn send_once<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    debug!("Upstream call succeeded: status={}, bytes={}", status, body.len());
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-process stand-in for the upstream jobs API.

    use std::net::SocketAddr;

    use axum::Router;
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A base URL nothing is listening on.
    pub async fn closed_upstream() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }
}
