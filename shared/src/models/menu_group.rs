//! Menu Group Model

use serde::{Deserialize, Serialize};

/// Menu group entity (a named section of the menu board)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuGroup {
    pub id: i64,
    pub name: String,
}

/// Create menu group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupCreate {
    pub name: String,
}
