//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::identity::AuthenticatedUser;

use crate::application::{
    GetProductUseCase, ListOrdersUseCase, ListProductsUseCase, NewOrderItem, PlaceOrderInput,
    PlaceOrderUseCase,
};
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::domain::value_object::ProductId;
use crate::error::{ShopError, ShopResult};
use crate::presentation::dto::{OrderResponse, PlaceOrderRequest, ProductResponse};

/// Shared state for shop handlers
pub struct ShopAppState<R>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// Manual impl: a derive would require `R: Clone`, but only the Arc is
// cloned per request.
impl<R> Clone for ShopAppState<R>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /products
pub async fn list_products<R>(
    State(state): State<ShopAppState<R>>,
) -> ShopResult<Json<Vec<ProductResponse>>>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());
    let products = use_case.execute().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /products/{id}
pub async fn get_product<R>(
    State(state): State<ShopAppState<R>>,
    Path(id): Path<String>,
) -> ShopResult<Json<ProductResponse>>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    // A malformed id can't match anything, so it reads as a miss.
    let product_id: ProductId = id.parse().map_err(|_| ShopError::ProductNotFound)?;

    let use_case = GetProductUseCase::new(state.repo.clone());
    let product = use_case.execute(&product_id).await?;

    Ok(Json(ProductResponse::from(product)))
}

// ============================================================================
// Orders (behind the auth gate)
// ============================================================================

/// POST /orders
pub async fn place_order<R>(
    State(state): State<ShopAppState<R>>,
    Extension(authed): Extension<AuthenticatedUser>,
    Json(req): Json<PlaceOrderRequest>,
) -> ShopResult<(StatusCode, Json<OrderResponse>)>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    let use_case = PlaceOrderUseCase::new(state.repo.clone());

    let input = PlaceOrderInput {
        items: req
            .items
            .into_iter()
            .map(|item| NewOrderItem {
                product_id: item.product_id,
                name: item.name,
                price: item.price,
                quantity: item.quantity,
            })
            .collect(),
        total_price: req.total_price,
        customer_name: req.customer_name,
        customer_email: req.customer_email,
        shipping_address: req.shipping_address,
    };

    let order = use_case.execute(&authed.user_id(), input).await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

/// GET /orders
pub async fn list_orders<R>(
    State(state): State<ShopAppState<R>>,
    Extension(authed): Extension<AuthenticatedUser>,
) -> ShopResult<Json<Vec<OrderResponse>>>
where
    R: CatalogRepository + OrderRepository + Send + Sync + 'static,
{
    let use_case = ListOrdersUseCase::new(state.repo.clone(), state.repo.clone());
    let orders = use_case.execute(&authed.user_id()).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
