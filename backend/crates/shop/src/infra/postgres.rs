//! PostgreSQL Repository Implementation
//!
//! One repository type backs both catalog and order traits so the
//! handlers can share a single pool-owning state value. Order items
//! are stored as a JSONB document inside the order row; the history
//! join happens in the application layer, not in SQL.

use sqlx::PgPool;
use sqlx::prelude::FromRow;
use sqlx::types::Json;

use crate::domain::entity::{Order, OrderItem, Product};
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::domain::value_object::{OrderId, OrderStatus, ProductId, UserId};
use crate::error::ShopResult;

/// PostgreSQL implementation of the shop repositories
#[derive(Clone)]
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for products table
#[derive(FromRow)]
struct ProductRow {
    product_id: uuid::Uuid,
    name: String,
    category: String,
    price: f64,
    image: String,
    occasion: String,
    color: String,
    description: String,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
            occasion: self.occasion,
            color: self.color,
            description: self.description,
        }
    }
}

/// Database row for orders table
#[derive(FromRow)]
struct OrderRow {
    order_id: uuid::Uuid,
    user_id: uuid::Uuid,
    items: Json<Vec<OrderItem>>,
    total_price: f64,
    customer_name: String,
    customer_email: String,
    shipping_address: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            order_id: OrderId::from_uuid(self.order_id),
            user_id: UserId::from_uuid(self.user_id),
            items: self.items.0,
            total_price: self.total_price,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            shipping_address: self.shipping_address,
            status: OrderStatus::from_db(&self.status),
            created_at: self.created_at,
        }
    }
}

impl CatalogRepository for PgShopRepository {
    async fn list_all(&self) -> ShopResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT product_id, name, category, price, image, occasion, color, description
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT product_id, name, category, price, image, occasion, color, description
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn find_by_ids(&self, product_ids: &[ProductId]) -> ShopResult<Vec<Product>> {
        let uuids: Vec<uuid::Uuid> = product_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT product_id, name, category, price, image, occasion, color, description
            FROM products
            WHERE product_id = ANY($1)
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}

impl OrderRepository for PgShopRepository {
    async fn create(&self, order: &Order) -> ShopResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, user_id, items, total_price,
                customer_name, customer_email, shipping_address,
                status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.user_id.as_uuid())
        .bind(Json(&order.items))
        .bind(order.total_price)
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.shipping_address)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> ShopResult<Vec<Order>> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT order_id, user_id, items, total_price,
                   customer_name, customer_email, shipping_address,
                   status, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }
}
