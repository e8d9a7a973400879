use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::shared::upstream::{AppState, ProxyError};
use crate::system::middleware::request_id;

/// GET /api/orders
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    state
        .upstream
        .forward("orders", query.as_deref(), request_id(&headers))
        .await
}
