//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::Product;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>("SELECT id, name, price FROM product ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>("SELECT id, name, price FROM product WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, name: &str, price: i64) -> RepoResult<Product> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO product (id, name, price) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(name)
        .bind(price)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}
