//! Order Table Repository

use super::{RepoError, RepoResult};
use shared::models::OrderTable;
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, table_group_id, number_of_guests, empty FROM order_table";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OrderTable>> {
    let sql = format!("{SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, OrderTable>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderTable>> {
    let sql = format!("{SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, OrderTable>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<OrderTable>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("{SELECT} WHERE id IN ({placeholders}) ORDER BY id");
    let mut query = sqlx::query_as::<_, OrderTable>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn find_by_group(pool: &SqlitePool, table_group_id: i64) -> RepoResult<Vec<OrderTable>> {
    let sql = format!("{SELECT} WHERE table_group_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, OrderTable>(&sql)
        .bind(table_group_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    number_of_guests: i32,
    empty: bool,
) -> RepoResult<OrderTable> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO order_table (id, number_of_guests, empty) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(number_of_guests)
        .bind(empty)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order table".into()))
}

pub async fn update_empty(pool: &SqlitePool, id: i64, empty: bool) -> RepoResult<OrderTable> {
    let rows = sqlx::query("UPDATE order_table SET empty = ?1 WHERE id = ?2")
        .bind(empty)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order table {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order table {id} not found")))
}

pub async fn update_number_of_guests(
    pool: &SqlitePool,
    id: i64,
    number_of_guests: i32,
) -> RepoResult<OrderTable> {
    let rows = sqlx::query("UPDATE order_table SET number_of_guests = ?1 WHERE id = ?2")
        .bind(number_of_guests)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order table {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order table {id} not found")))
}
