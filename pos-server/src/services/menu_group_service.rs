//! Menu Group Service

use crate::db::repository::{self, RepoResult};
use shared::models::{MenuGroup, MenuGroupCreate};
use sqlx::SqlitePool;

/// Menu group management
#[derive(Clone)]
pub struct MenuGroupService {
    pool: SqlitePool,
}

impl MenuGroupService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: MenuGroupCreate) -> RepoResult<MenuGroup> {
        let group = repository::menu_group::create(&self.pool, &data.name).await?;
        tracing::info!("Menu group created: {} ({})", group.name, group.id);
        Ok(group)
    }

    pub async fn list(&self) -> RepoResult<Vec<MenuGroup>> {
        repository::menu_group::find_all(&self.pool).await
    }
}
