//! Order Repository
//!
//! An order owns its line item rows; creation inserts both in one
//! transaction.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderLineItem, OrderLineItemInput, OrderStatus};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, order_table_id, order_status, ordered_time FROM orders";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!("{SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Line item rows for one order, in seq order
pub async fn find_line_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderLineItem>> {
    let rows = sqlx::query_as::<_, OrderLineItem>(
        "SELECT seq, order_id, menu_id, quantity FROM order_line_item WHERE order_id = ? ORDER BY seq",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    order_table_id: i64,
    order_status: OrderStatus,
    ordered_time: i64,
    line_items: &[OrderLineItemInput],
) -> RepoResult<Order> {
    let id = shared::util::snowflake_id();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO orders (id, order_table_id, order_status, ordered_time) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(id)
    .bind(order_table_id)
    .bind(order_status)
    .bind(ordered_time)
    .execute(&mut *tx)
    .await?;

    // seq is the rowid, assigned in insertion order
    for item in line_items {
        sqlx::query("INSERT INTO order_line_item (order_id, menu_id, quantity) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(item.menu_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    order_status: OrderStatus,
) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET order_status = ?1 WHERE id = ?2")
        .bind(order_status)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Whether any of the given tables has an order still in COOKING or MEAL
pub async fn exists_in_progress_for_tables(
    pool: &SqlitePool,
    table_ids: &[i64],
) -> RepoResult<bool> {
    if table_ids.is_empty() {
        return Ok(false);
    }
    let placeholders = vec!["?"; table_ids.len()].join(", ");
    let sql = format!(
        "SELECT COUNT(*) FROM orders WHERE order_table_id IN ({placeholders}) AND order_status IN ('COOKING', 'MEAL')"
    );
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in table_ids {
        query = query.bind(*id);
    }
    let count = query.fetch_one(pool).await?;
    Ok(count > 0)
}
