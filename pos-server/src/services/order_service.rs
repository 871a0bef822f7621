//! Order Service

use crate::db::repository::{self, RepoError, RepoResult};
use shared::models::{OrderCreate, OrderFull, OrderStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Order lifecycle management
///
/// Orders open in COOKING; status may be overwritten until the order
/// reaches COMPLETION, which freezes it.
#[derive(Clone)]
pub struct OrderService {
    pool: SqlitePool,
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a new order on a table
    pub async fn create(&self, data: OrderCreate) -> RepoResult<OrderFull> {
        if data.order_line_items.is_empty() {
            return Err(RepoError::Validation(
                "Order must contain at least one line item".into(),
            ));
        }

        for item in &data.order_line_items {
            if repository::menu::find_by_id(&self.pool, item.menu_id)
                .await?
                .is_none()
            {
                return Err(RepoError::Validation(format!(
                    "Menu {} does not exist",
                    item.menu_id
                )));
            }
        }

        if repository::order_table::find_by_id(&self.pool, data.order_table_id)
            .await?
            .is_none()
        {
            return Err(RepoError::Validation(format!(
                "Order table {} does not exist",
                data.order_table_id
            )));
        }

        let order = repository::order::create(
            &self.pool,
            data.order_table_id,
            OrderStatus::Cooking,
            now_millis(),
            &data.order_line_items,
        )
        .await?;
        let order_line_items = repository::order::find_line_items(&self.pool, order.id).await?;
        tracing::info!(
            "Order {} opened on table {} ({} items)",
            order.id,
            order.order_table_id,
            order_line_items.len()
        );

        Ok(OrderFull {
            id: order.id,
            order_table_id: order.order_table_id,
            order_status: order.order_status,
            ordered_time: order.ordered_time,
            order_line_items,
        })
    }

    /// List all orders with their line items
    pub async fn list(&self) -> RepoResult<Vec<OrderFull>> {
        let orders = repository::order::find_all(&self.pool).await?;
        let mut out = Vec::with_capacity(orders.len());
        for order in orders {
            let order_line_items =
                repository::order::find_line_items(&self.pool, order.id).await?;
            out.push(OrderFull {
                id: order.id,
                order_table_id: order.order_table_id,
                order_status: order.order_status,
                ordered_time: order.ordered_time,
                order_line_items,
            });
        }
        Ok(out)
    }

    /// Overwrite an order's status
    ///
    /// Completed orders refuse further changes.
    pub async fn change_order_status(
        &self,
        order_id: i64,
        order_status: OrderStatus,
    ) -> RepoResult<OrderFull> {
        let existing = repository::order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {order_id} not found")))?;
        if existing.order_status == OrderStatus::Completion {
            return Err(RepoError::Validation(format!(
                "Order {order_id} is already completed"
            )));
        }

        let order = repository::order::update_status(&self.pool, order_id, order_status).await?;
        let order_line_items = repository::order::find_line_items(&self.pool, order_id).await?;
        tracing::info!(
            "Order {} status: {} -> {}",
            order_id,
            existing.order_status,
            order.order_status
        );

        Ok(OrderFull {
            id: order.id,
            order_table_id: order.order_table_id,
            order_status: order.order_status,
            ordered_time: order.ordered_time,
            order_line_items,
        })
    }
}
