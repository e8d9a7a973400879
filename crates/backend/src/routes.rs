use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::IntoResponse;
use axum::{middleware, routing::get, Json, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::upstream::AppState;
use crate::system::middleware::{request_logger, REQUEST_ID_HEADER};

/// Конфигурация всех роутов приложения
///
/// `/api/*` проксируется в upstream, остальное отдаётся из `static_dir`
/// с `index.html` как fallback для клиентского роутинга.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/orders", get(handlers::orders::list))
        .route("/api/users", get(handlers::users::list))
        .route("/api/*rest", get(unknown_api))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

async fn unknown_api() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "unknown resource" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::UpstreamConfig;
    use crate::system::middleware::request_id;
    use axum::extract::{Query, RawQuery, State};
    use axum::http::HeaderMap;
    use axum::response::Response;
    use contracts::domain::orders::{Order, OrderCustomer};
    use contracts::shared::list_query::{ListQuery, SortOrder};
    use contracts::shared::pagination::{PageEnvelope, Pagination};
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    fn order(id: i64, customer: &str, total: f64) -> Order {
        Order {
            order_id: id,
            status: "paid".into(),
            total,
            created_at: Some("2024-03-01T10:00:00Z".into()),
            user: OrderCustomer {
                user_id: id * 10,
                name: customer.into(),
                email: None,
            },
            items: vec![],
        }
    }

    /// Сырая строка запроса и request id каждого вызова, дошедшего до upstream.
    type Seen = Arc<Mutex<Vec<(String, String)>>>;

    /// Заглушка сервиса данных: фильтр заказов по имени покупателя,
    /// сортировка по total.
    async fn fixture_orders(
        State(seen): State<Seen>,
        headers: HeaderMap,
        RawQuery(raw): RawQuery,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<PageEnvelope<Order>> {
        seen.lock().unwrap().push((
            raw.unwrap_or_default(),
            request_id(&headers).unwrap_or_default().to_string(),
        ));

        let query = ListQuery::from_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let mut matching: Vec<Order> = vec![
            order(1, "Acme Corp", 10.0),
            order(2, "Globex", 99.0),
            order(3, "ACME Ltd", 30.0),
            order(4, "acme inc", 20.0),
        ]
        .into_iter()
        .filter(|o| {
            o.user
                .name
                .to_lowercase()
                .contains(&query.search.to_lowercase())
        })
        .collect();
        if query.sort == "total" {
            matching.sort_by(|a, b| a.total.total_cmp(&b.total));
            if query.order == SortOrder::Desc {
                matching.reverse();
            }
        }
        let total = matching.len() as u64;
        let data: Vec<Order> = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Json(PageEnvelope {
            pagination: Pagination {
                total,
                limit: u64::from(query.limit),
                offset: u64::from(query.offset),
                count: data.len() as u64,
            },
            data,
        })
    }

    async fn fixture_users() -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain")],
            "database is down",
        )
            .into_response()
    }

    async fn serve(app: Router) -> SocketAddr {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn spawn_upstream() -> (SocketAddr, Seen) {
        let seen = Seen::default();
        let addr = serve(
            Router::new()
                .route("/api/orders", get(fixture_orders))
                .route("/api/users", get(fixture_users))
                .with_state(seen.clone()),
        )
        .await;
        (addr, seen)
    }

    fn static_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("admin-dist-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>admin</html>").unwrap();
        dir
    }

    async fn spawn_app(base_url: String) -> String {
        let state = AppState::new(&UpstreamConfig {
            base_url,
            timeout_secs: 5,
        })
        .unwrap();
        let addr = serve(configure_routes(state, &static_dir())).await;
        format!("http://{addr}")
    }

    fn totals(page: &PageEnvelope<Order>) -> Vec<f64> {
        page.data.iter().map(|o| o.total).collect()
    }

    #[tokio::test]
    async fn test_acme_pages_through_proxy() {
        let (upstream, _) = spawn_upstream().await;
        let app = spawn_app(format!("http://{upstream}/api")).await;
        let client = reqwest::Client::new();

        let page: PageEnvelope<Order> = client
            .get(format!(
                "{app}/api/orders?search=acme&limit=2&offset=0&sort=total&order=desc"
            ))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(totals(&page), vec![30.0, 20.0]);
        assert_eq!(page.pagination.total, 3);
        assert!(page.validate().is_ok());

        let page: PageEnvelope<Order> = client
            .get(format!(
                "{app}/api/orders?search=acme&limit=2&offset=2&sort=total&order=desc"
            ))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(totals(&page), vec![10.0]);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.count, 1);
    }

    #[tokio::test]
    async fn test_query_and_request_id_forwarded_verbatim() {
        let (upstream, seen) = spawn_upstream().await;
        let app = spawn_app(format!("http://{upstream}/api/")).await;

        let raw = "search=o%27brien%20%26%20co&limit=25&offset=0&sort=total&order=asc&tab=2";
        let response = reqwest::Client::new()
            .get(format!("{app}/api/orders?{raw}"))
            .header(REQUEST_ID_HEADER, "req-42")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
        assert_eq!(
            seen.lock().unwrap().clone(),
            vec![(raw.to_string(), "req-42".to_string())]
        );
    }

    #[tokio::test]
    async fn test_request_id_assigned_when_missing() {
        let (upstream, seen) = spawn_upstream().await;
        let app = spawn_app(format!("http://{upstream}/api")).await;

        let response = reqwest::get(format!("{app}/api/orders")).await.unwrap();
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "application/json"
        );
        let assigned = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();
        assert!(uuid::Uuid::parse_str(&assigned).is_ok());
        assert_eq!(seen.lock().unwrap()[0], (String::new(), assigned));
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through() {
        let (upstream, _) = spawn_upstream().await;
        let app = spawn_app(format!("http://{upstream}/api")).await;

        let response = reqwest::get(format!("{app}/api/users?limit=25"))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(response.text().await.unwrap(), "database is down");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = closed.local_addr().unwrap();
        drop(closed);
        let app = spawn_app(format!("http://{addr}/api")).await;

        let response = reqwest::get(format!("{app}/api/orders")).await.unwrap();
        assert_eq!(response.status(), 502);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("upstream request failed"));
    }

    #[tokio::test]
    async fn test_health_and_spa_fallback() {
        let (upstream, _) = spawn_upstream().await;
        let app = spawn_app(format!("http://{upstream}/api")).await;

        let health = reqwest::get(format!("{app}/health")).await.unwrap();
        assert_eq!(health.text().await.unwrap(), "ok");

        let page = reqwest::get(format!("{app}/orders?search=acme")).await.unwrap();
        assert_eq!(page.status(), 200);
        assert_eq!(page.text().await.unwrap(), "<html>admin</html>");

        let missing = reqwest::get(format!("{app}/api/products")).await.unwrap();
        assert_eq!(missing.status(), 404);
    }
}
