//! Menu Group Repository

use super::{RepoError, RepoResult};
use shared::models::MenuGroup;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuGroup>> {
    let rows = sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_group ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuGroup>> {
    let row = sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_group WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, name: &str) -> RepoResult<MenuGroup> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO menu_group (id, name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu group".into()))
}
