//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
///
/// Stored as TEXT. Once an order reaches `Completion` its status is frozen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum OrderStatus {
    #[default]
    Cooking,
    Meal,
    Completion,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        })
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Order table reference (must exist)
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    /// Creation time, UTC milliseconds
    pub ordered_time: i64,
}

/// Order line item row (menu + quantity within an order)
///
/// `order_id` is a foreign-key value assigned when the order persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLineItem {
    pub seq: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

/// Line item input for order creation (seq and order_id assigned on persist)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItemInput {
    pub menu_id: i64,
    pub quantity: i64,
}

/// Create order payload
///
/// Status and ordered time are not part of the payload: the service sets
/// them on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_table_id: i64,
    pub order_line_items: Vec<OrderLineItemInput>,
}

/// Order with its line items populated (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFull {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    pub ordered_time: i64,
    pub order_line_items: Vec<OrderLineItem>,
}
