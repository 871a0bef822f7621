//! Table Service

use crate::db::repository::{self, RepoError, RepoResult};
use shared::models::{OrderTable, OrderTableCreate};
use sqlx::SqlitePool;

/// Order table management
#[derive(Clone)]
pub struct TableService {
    pool: SqlitePool,
}

impl TableService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new table, ungrouped
    pub async fn create(&self, data: OrderTableCreate) -> RepoResult<OrderTable> {
        let table = repository::order_table::create(
            &self.pool,
            data.number_of_guests.unwrap_or(0),
            data.empty.unwrap_or(true),
        )
        .await?;
        tracing::info!("Order table created: {}", table.id);
        Ok(table)
    }

    /// List all tables
    pub async fn list(&self) -> RepoResult<Vec<OrderTable>> {
        repository::order_table::find_all(&self.pool).await
    }

    /// Flip the occupancy flag
    ///
    /// Grouped tables and tables with an order still in COOKING/MEAL
    /// refuse the change.
    pub async fn change_empty(&self, table_id: i64, empty: bool) -> RepoResult<OrderTable> {
        let table = repository::order_table::find_by_id(&self.pool, table_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order table {table_id} not found")))?;
        if table.table_group_id.is_some() {
            return Err(RepoError::Validation(format!(
                "Table {table_id} belongs to a table group"
            )));
        }
        if repository::order::exists_in_progress_for_tables(&self.pool, &[table_id]).await? {
            return Err(RepoError::Validation(format!(
                "Table {table_id} has an order in progress"
            )));
        }

        repository::order_table::update_empty(&self.pool, table_id, empty).await
    }

    /// Change the seated guest count of an occupied table
    pub async fn change_number_of_guests(
        &self,
        table_id: i64,
        number_of_guests: i32,
    ) -> RepoResult<OrderTable> {
        if number_of_guests < 0 {
            return Err(RepoError::Validation(format!(
                "Number of guests must not be negative: {number_of_guests}"
            )));
        }
        let table = repository::order_table::find_by_id(&self.pool, table_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order table {table_id} not found")))?;
        if table.empty {
            return Err(RepoError::Validation(format!(
                "Table {table_id} is empty"
            )));
        }

        repository::order_table::update_number_of_guests(&self.pool, table_id, number_of_guests)
            .await
    }
}
