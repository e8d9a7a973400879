//! Forwarding of list requests to the upstream data service.
//!
//! The query string is passed through untouched and the upstream status,
//! content type and body come back verbatim. Only transport failures are
//! turned into a local `502 {"error": ...}` response.

use axum::body::Body;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Duration;

use crate::shared::config::UpstreamConfig;
use crate::system::middleware::REQUEST_ID_HEADER;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),
    #[error("upstream body could not be read: {0}")]
    Body(reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{resource}` plus the raw query, if any.
    pub fn resource_url(&self, resource: &str, raw_query: Option<&str>) -> String {
        match raw_query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}/{}?{}", self.base_url, resource, query),
            None => format!("{}/{}", self.base_url, resource),
        }
    }

    pub async fn forward(
        &self,
        resource: &str,
        raw_query: Option<&str>,
        request_id: Option<&str>,
    ) -> Result<Response, ProxyError> {
        let url = self.resource_url(resource, raw_query);
        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(id) = request_id {
            request = request.header(REQUEST_ID_HEADER, id);
        }

        let upstream = request.send().await.map_err(ProxyError::Transport)?;
        let status =
            StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = upstream
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| HeaderValue::from_str(v).ok());
        let body = upstream.bytes().await.map_err(ProxyError::Body)?;

        tracing::debug!(
            "GET {} -> {} ({} bytes)",
            url,
            status.as_u16(),
            body.len()
        );

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        if let Some(content_type) = content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Ok(response)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
}

impl AppState {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        Ok(Self {
            upstream: Arc::new(Upstream::new(config)?),
        })
    }
}
