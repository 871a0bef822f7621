//! Table Group Model

use super::OrderTable;
use serde::{Deserialize, Serialize};

/// Table group entity (tables merged for shared billing/occupancy)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableGroup {
    pub id: i64,
    /// Grouping time, UTC milliseconds
    pub created_date: i64,
}

/// Create table group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupCreate {
    pub order_table_ids: Vec<i64>,
}

/// Table group with its member tables populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupFull {
    pub id: i64,
    pub created_date: i64,
    pub order_tables: Vec<OrderTable>,
}
