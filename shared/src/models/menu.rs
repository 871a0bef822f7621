//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub name: String,
    /// Price in minor currency units; never exceeds the line product total
    pub price: i64,
    /// Menu group reference (must exist)
    pub menu_group_id: i64,
}

/// Menu product row (product + quantity within a menu)
///
/// `menu_id` is a foreign-key value assigned when the menu persists, not an
/// embedded back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuProduct {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Menu product input for menu creation (seq and menu_id assigned on persist)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProductInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub price: Option<i64>,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductInput>,
}

/// Menu with its menu product rows populated (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFull {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProduct>,
}
