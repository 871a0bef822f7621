//! Menu Repository
//!
//! A menu owns its menu_product rows; creation inserts both in one
//! transaction.

use super::{RepoError, RepoResult};
use shared::models::{Menu, MenuProduct, MenuProductInput};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Menu>> {
    let rows =
        sqlx::query_as::<_, Menu>("SELECT id, name, price, menu_group_id FROM menu ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Menu>> {
    let row =
        sqlx::query_as::<_, Menu>("SELECT id, name, price, menu_group_id FROM menu WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Menu product rows for one menu, in seq order
pub async fn find_products(pool: &SqlitePool, menu_id: i64) -> RepoResult<Vec<MenuProduct>> {
    let rows = sqlx::query_as::<_, MenuProduct>(
        "SELECT seq, menu_id, product_id, quantity FROM menu_product WHERE menu_id = ? ORDER BY seq",
    )
    .bind(menu_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    price: i64,
    menu_group_id: i64,
    menu_products: &[MenuProductInput],
) -> RepoResult<Menu> {
    let id = shared::util::snowflake_id();
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO menu (id, name, price, menu_group_id) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(menu_group_id)
        .execute(&mut *tx)
        .await?;

    // seq is the rowid, assigned in insertion order
    for mp in menu_products {
        sqlx::query("INSERT INTO menu_product (menu_id, product_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(mp.product_id)
            .bind(mp.quantity)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu".into()))
}
