use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::shared::format::format_size;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id от клиента или назначенный в [`request_logger`].
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing:
/// - id запроса (берётся из `x-request-id` или генерируется)
/// - длительность (ms)
/// - размер ответа
/// - статус код, метод и путь
///
/// Тот же id возвращается клиенту в заголовке ответа.
pub async fn request_logger(mut req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let id = match request_id(req.headers()) {
        Some(id) => id.to_string(),
        None => {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            id
        }
    };

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();
    if let Ok(value) = HeaderValue::from_str(&id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                request_id = %id,
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} body read failed: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(request_id = %id, status, elapsed_ms, size = %size, "{} {}", method, uri);
    } else {
        tracing::warn!(request_id = %id, status, elapsed_ms, size = %size, "{} {}", method, uri);
    }

    Response::from_parts(parts, Body::from(bytes))
}
