//! Place Order Use Case
//!
//! Turns the client-held cart into an immutable order. The client
//! sends item snapshots and a total; the server validates the items,
//! recomputes the total from them, and rejects any disagreement rather
//! than trusting the client's arithmetic.

use std::sync::Arc;

use crate::domain::entity::{Order, OrderItem};
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{ProductId, UserId};
use crate::error::{ShopError, ShopResult};

/// Float comparison slack for recomputed totals; covers decimal price
/// rounding on the client without letting real discrepancies through.
const TOTAL_TOLERANCE: f64 = 0.009;

/// One cart line as submitted by the client.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Input for placing an order
#[derive(Debug)]
pub struct PlaceOrderInput {
    pub items: Vec<NewOrderItem>,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: String,
}

/// Place order use case
pub struct PlaceOrderUseCase<O>
where
    O: OrderRepository + Send + Sync,
{
    orders: Arc<O>,
}

impl<O> PlaceOrderUseCase<O>
where
    O: OrderRepository + Send + Sync,
{
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// Validate and persist an order for the authenticated user.
    ///
    /// Ownership, status, and timestamp are server-assigned; the stored
    /// record is returned for the 201 body.
    pub async fn execute(&self, user_id: &UserId, input: PlaceOrderInput) -> ShopResult<Order> {
        if input.items.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        let mut items = Vec::with_capacity(input.items.len());
        for line in input.items {
            if line.quantity < 1 {
                return Err(ShopError::InvalidQuantity);
            }
            if line.price < 0.0 {
                return Err(ShopError::InvalidPrice);
            }
            items.push(OrderItem {
                product_id: line.product_id,
                name: line.name,
                price: line.price,
                quantity: line.quantity,
            });
        }

        let computed = Order::computed_total(&items);
        if (computed - input.total_price).abs() > TOTAL_TOLERANCE {
            tracing::warn!(
                claimed = input.total_price,
                computed,
                "Order total mismatch"
            );
            return Err(ShopError::TotalMismatch);
        }

        let order = Order::new(
            *user_id,
            items,
            computed,
            input.customer_name,
            input.customer_email,
            input.shipping_address,
        );

        self.orders.create(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            items = order.items.len(),
            total = order.total_price,
            "Order placed"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::OrderRepository as _;
    use crate::domain::value_object::OrderStatus;
    use crate::test_support::InMemoryOrders;

    fn line(price: f64, quantity: u32) -> NewOrderItem {
        NewOrderItem {
            product_id: ProductId::new(),
            name: "Velvet Clutch".to_string(),
            price,
            quantity,
        }
    }

    fn input(items: Vec<NewOrderItem>, total_price: f64) -> PlaceOrderInput {
        PlaceOrderInput {
            items,
            total_price,
            customer_name: "Ada".to_string(),
            customer_email: "ada@example.com".to_string(),
            shipping_address: "1 Engine St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_cart_is_always_rejected() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders.clone());

        let err = use_case
            .execute(&UserId::new(), input(vec![], 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::EmptyCart));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn test_order_round_trip_preserves_items_total_and_shipping() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders.clone());
        let user_id = UserId::new();

        let placed = use_case
            .execute(&user_id, input(vec![line(25.0, 2), line(10.0, 1)], 60.0))
            .await
            .unwrap();

        let stored = orders.find_by_user(&user_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].items, placed.items);
        assert_eq!(stored[0].total_price, 60.0);
        assert_eq!(stored[0].shipping_address, "1 Engine St");
        assert_eq!(stored[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_server_assigns_owner_and_pending_status() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders);
        let user_id = UserId::new();

        let order = use_case
            .execute(&user_id, input(vec![line(5.0, 1)], 5.0))
            .await
            .unwrap();

        assert_eq!(order.user_id, user_id);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_mismatched_total_is_rejected() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders.clone());

        let err = use_case
            .execute(&UserId::new(), input(vec![line(25.0, 2)], 49.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::TotalMismatch));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn test_total_within_rounding_slack_is_accepted() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders);

        let order = use_case
            .execute(&UserId::new(), input(vec![line(19.99, 3)], 59.97))
            .await
            .unwrap();
        assert!((order.total_price - 59.97).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders);

        let err = use_case
            .execute(&UserId::new(), input(vec![line(5.0, 0)], 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::InvalidQuantity));
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let orders = Arc::new(InMemoryOrders::new());
        let use_case = PlaceOrderUseCase::new(orders);

        let err = use_case
            .execute(&UserId::new(), input(vec![line(-1.0, 1)], -1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::InvalidPrice));
    }
}
