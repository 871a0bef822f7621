//! Order Table Model

use serde::{Deserialize, Serialize};

/// Order table entity
///
/// `table_group_id = None` means the table is ungrouped. `empty` is the
/// occupancy flag: an empty table has no seated guests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderTable {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

/// Create order table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTableCreate {
    pub number_of_guests: Option<i32>,
    pub empty: Option<bool>,
}
