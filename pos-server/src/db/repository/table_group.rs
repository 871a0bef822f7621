//! Table Group Repository
//!
//! Grouping and ungrouping touch the group row and the member tables'
//! link columns together, inside one transaction.

use super::{RepoError, RepoResult};
use shared::models::TableGroup;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TableGroup>> {
    let row =
        sqlx::query_as::<_, TableGroup>("SELECT id, created_date FROM table_group WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Insert the group and link the member tables (occupied, group-referenced)
pub async fn create_with_tables(
    pool: &SqlitePool,
    created_date: i64,
    table_ids: &[i64],
) -> RepoResult<TableGroup> {
    let id = shared::util::snowflake_id();
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO table_group (id, created_date) VALUES (?1, ?2)")
        .bind(id)
        .bind(created_date)
        .execute(&mut *tx)
        .await?;

    for table_id in table_ids {
        sqlx::query("UPDATE order_table SET table_group_id = ?1, empty = 0 WHERE id = ?2")
            .bind(id)
            .bind(*table_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create table group".into()))
}

/// Unlink the member tables and remove the group row
///
/// Tables keep their occupancy flag; clearing a table goes through
/// `order_table::update_empty`.
pub async fn ungroup(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE order_table SET table_group_id = NULL WHERE table_group_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let rows = sqlx::query("DELETE FROM table_group WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table group {id} not found")));
    }

    tx.commit().await?;
    Ok(())
}
