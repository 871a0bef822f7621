//! Shared test helpers
//!
//! Every test runs against its own in-memory database with the real
//! migrations applied.

#![allow(dead_code)]

use pos_server::DbService;
use pos_server::services::{MenuGroupService, MenuService, ProductService, TableService};
use shared::models::{
    MenuCreate, MenuFull, MenuGroup, MenuGroupCreate, MenuProductInput, OrderTable,
    OrderTableCreate, Product, ProductCreate,
};
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    DbService::in_memory().await.unwrap().pool
}

pub async fn seed_product(pool: &SqlitePool, name: &str, price: i64) -> Product {
    ProductService::new(pool.clone())
        .create(ProductCreate {
            name: name.into(),
            price: Some(price),
        })
        .await
        .unwrap()
}

pub async fn seed_menu_group(pool: &SqlitePool, name: &str) -> MenuGroup {
    MenuGroupService::new(pool.clone())
        .create(MenuGroupCreate { name: name.into() })
        .await
        .unwrap()
}

pub async fn seed_menu(
    pool: &SqlitePool,
    name: &str,
    price: i64,
    menu_group_id: i64,
    product_id: i64,
    quantity: i64,
) -> MenuFull {
    MenuService::new(pool.clone())
        .create(MenuCreate {
            name: name.into(),
            price: Some(price),
            menu_group_id,
            menu_products: vec![MenuProductInput {
                product_id,
                quantity,
            }],
        })
        .await
        .unwrap()
}

pub async fn seed_table(pool: &SqlitePool, number_of_guests: i32, empty: bool) -> OrderTable {
    TableService::new(pool.clone())
        .create(OrderTableCreate {
            number_of_guests: Some(number_of_guests),
            empty: Some(empty),
        })
        .await
        .unwrap()
}
