//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Price is in minor currency units and is validated (present, >= 0) at
/// creation; rows are not mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

/// Create product payload
///
/// Price is optional in the payload; the service requires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Option<i64>,
}
