use super::fetch::FetchError;
use crate::shared::api_utils::api_url;
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::PageEnvelope;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// A remote paginated collection reached through the backend proxy.
pub trait ListEndpoint: 'static {
    type Row: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Path of the proxy route, e.g. `/api/orders`.
    const PATH: &'static str;

    /// Encodes all five list fields in the resource's own parameter scheme.
    fn query_string(query: &ListQuery) -> Result<String, FetchError>;
}

pub fn request_url<E: ListEndpoint>(query: &ListQuery) -> Result<String, FetchError> {
    let qs = E::query_string(query)?;
    Ok(format!("{}?{}", api_url(E::PATH), qs))
}

/// One GET per call, no retries.
pub async fn fetch_page<E: ListEndpoint>(
    query: &ListQuery,
) -> Result<PageEnvelope<E::Row>, FetchError> {
    let url = request_url::<E>(query)?;

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    response
        .json::<PageEnvelope<E::Row>>()
        .await
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

/// `serde_qs` encoding shared by the endpoint impls.
pub fn encode_request<R: serde::Serialize>(request: &R) -> Result<String, FetchError> {
    serde_qs::to_string(request).map_err(|e| FetchError::Malformed(e.to_string()))
}
