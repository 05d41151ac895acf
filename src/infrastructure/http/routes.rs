//! HTTP Routes
//!
//! API Endpoints:
//! - /stores        POST  创建门店
//! - /stores/{id}   GET   获取门店详情
//! - /ping          GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(store_routes())
}

/// Store 路由
fn store_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stores", post(handlers::create_store))
        .route("/stores/:id", get(handlers::get_store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryStoreRepository;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_ping() {
        let state = AppState::from_repository(Arc::new(InMemoryStoreRepository::new()));
        let app = create_routes().with_state(Arc::new(state));

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["service"], "projectstore");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState::from_repository(Arc::new(InMemoryStoreRepository::new()));
        let app = create_routes().with_state(Arc::new(state));

        let response = app
            .oneshot(Request::builder().uri("/shops/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
