//! Table Group Service

use crate::db::repository::{self, RepoError, RepoResult};
use shared::models::{TableGroupCreate, TableGroupFull};
use shared::util::now_millis;
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Table grouping for shared billing/occupancy
#[derive(Clone)]
pub struct TableGroupService {
    pool: SqlitePool,
}

impl TableGroupService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Merge tables into a group
    ///
    /// Requires at least two distinct existing tables, all empty and
    /// ungrouped. Grouping marks every member occupied and linked.
    pub async fn create(&self, data: TableGroupCreate) -> RepoResult<TableGroupFull> {
        let ids = &data.order_table_ids;
        if ids.len() < 2 {
            return Err(RepoError::Validation(
                "A table group needs at least two tables".into(),
            ));
        }
        let unique: HashSet<i64> = ids.iter().copied().collect();
        if unique.len() != ids.len() {
            return Err(RepoError::Duplicate(
                "Duplicate table ids in group request".into(),
            ));
        }

        let tables = repository::order_table::find_by_ids(&self.pool, ids).await?;
        if tables.len() != ids.len() {
            return Err(RepoError::Validation(
                "Some tables in the group request do not exist".into(),
            ));
        }
        for table in &tables {
            if !table.empty || table.table_group_id.is_some() {
                return Err(RepoError::Validation(format!(
                    "Table {} is occupied or already grouped",
                    table.id
                )));
            }
        }

        let group =
            repository::table_group::create_with_tables(&self.pool, now_millis(), ids).await?;
        let order_tables = repository::order_table::find_by_group(&self.pool, group.id).await?;
        tracing::info!(
            "Table group {} created over {} tables",
            group.id,
            order_tables.len()
        );

        Ok(TableGroupFull {
            id: group.id,
            created_date: group.created_date,
            order_tables,
        })
    }

    /// Dissolve a group
    ///
    /// Member tables stay occupied but lose their group link; refused
    /// while any member still has an order in COOKING/MEAL.
    pub async fn ungroup(&self, table_group_id: i64) -> RepoResult<()> {
        if repository::table_group::find_by_id(&self.pool, table_group_id)
            .await?
            .is_none()
        {
            return Err(RepoError::NotFound(format!(
                "Table group {table_group_id} not found"
            )));
        }

        let tables = repository::order_table::find_by_group(&self.pool, table_group_id).await?;
        let table_ids: Vec<i64> = tables.iter().map(|t| t.id).collect();
        if repository::order::exists_in_progress_for_tables(&self.pool, &table_ids).await? {
            return Err(RepoError::Validation(format!(
                "Table group {table_group_id} has an order in progress"
            )));
        }

        repository::table_group::ungroup(&self.pool, table_group_id).await?;
        tracing::info!("Table group {} dissolved", table_group_id);
        Ok(())
    }
}
