//! Shop Routers
//!
//! The catalog is public; orders require the auth gate, which is owned
//! by the auth module and layered on by the binary when it composes the
//! application router.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::presentation::handlers::{self, ShopAppState};

/// Public catalog routes: /products, /products/{id}
pub fn catalog_router<R>(repo: Arc<R>) -> Router
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/products", get(handlers::list_products::<R>))
        .route("/products/{id}", get(handlers::get_product::<R>))
        .with_state(ShopAppState { repo })
}

/// Identity-scoped order routes: /orders.
///
/// Callers must wrap this router in the bearer-auth middleware; the
/// handlers read the authenticated identity from request extensions.
pub fn orders_router<R>(repo: Arc<R>) -> Router
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/orders",
            post(handlers::place_order::<R>).get(handlers::list_orders::<R>),
        )
        .with_state(ShopAppState { repo })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::ServiceExt;

    use auth::{AuthConfig, AuthGateState, require_auth, token};
    use kernel::id::UserId;

    use crate::test_support::{InMemoryShop, sample_product};

    fn app(repo: Arc<InMemoryShop>, config: Arc<AuthConfig>) -> Router {
        let gate = AuthGateState { config };
        let protected = orders_router(repo.clone())
            .route_layer(axum::middleware::from_fn_with_state(gate, require_auth));
        catalog_router(repo).merge(protected)
    }

    fn bearer(config: &AuthConfig, user_id: &UserId) -> String {
        format!("Bearer {}", token::issue(user_id, config).unwrap())
    }

    fn order_body() -> serde_json::Value {
        json!({
            "items": [{
                "productId": kernel::id::ProductId::new().to_string(),
                "name": "Scarf",
                "price": 15.0,
                "quantity": 2
            }],
            "totalPrice": 30.0,
            "customerName": "Ada",
            "customerEmail": "ada@example.com",
            "shippingAddress": "1 Engine St"
        })
    }

    #[tokio::test]
    async fn catalog_is_public() {
        let repo = Arc::new(InMemoryShop::with_products(vec![sample_product(
            "Red Gown", "Dress", 120.0,
        )]));
        let config = Arc::new(AuthConfig::new("test-secret"));

        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_product_is_404() {
        let repo = Arc::new(InMemoryShop::with_products(vec![]));
        let config = Arc::new(AuthConfig::new("test-secret"));

        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .uri("/products/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Product not found");
    }

    #[tokio::test]
    async fn unauthenticated_order_placement_is_401() {
        let repo = Arc::new(InMemoryShop::with_products(vec![]));
        let config = Arc::new(AuthConfig::new("test-secret"));

        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(order_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn authenticated_order_placement_is_201() {
        let repo = Arc::new(InMemoryShop::with_products(vec![]));
        let config = Arc::new(AuthConfig::new("test-secret"));
        let user_id = UserId::new();
        let auth_header = bearer(&config, &user_id);

        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, &auth_header)
                    .body(Body::from(order_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["totalPrice"], 30.0);
        assert_eq!(parsed["status"], "Pending");
    }

    #[tokio::test]
    async fn empty_cart_is_400() {
        let repo = Arc::new(InMemoryShop::with_products(vec![]));
        let config = Arc::new(AuthConfig::new("test-secret"));
        let auth_header = bearer(&config, &UserId::new());

        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, &auth_header)
                    .body(Body::from(json!({"items": []}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Cart is empty");
    }

    #[tokio::test]
    async fn order_history_only_lists_own_orders() {
        let repo = Arc::new(InMemoryShop::with_products(vec![]));
        let config = Arc::new(AuthConfig::new("test-secret"));
        let user_a = UserId::new();
        let user_b = UserId::new();

        for user in [&user_a, &user_b] {
            let auth_header = bearer(&config, user);
            let response = app(repo.clone(), config.clone())
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/orders")
                        .header(header::CONTENT_TYPE, "application/json")
                        .header(header::AUTHORIZATION, &auth_header)
                        .body(Body::from(order_body().to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let auth_header = bearer(&config, &user_a);
        let response = app(repo, config)
            .oneshot(
                Request::builder()
                    .uri("/orders")
                    .header(header::AUTHORIZATION, &auth_header)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }
}
