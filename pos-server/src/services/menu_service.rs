//! Menu Service

use crate::db::repository::{self, RepoError, RepoResult};
use shared::models::{MenuCreate, MenuFull};
use sqlx::SqlitePool;

/// Menu management
///
/// A menu is priced against its line products: the menu price may not
/// exceed Σ(quantity × product price) at creation time.
#[derive(Clone)]
pub struct MenuService {
    pool: SqlitePool,
}

impl MenuService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new menu with its menu product rows
    pub async fn create(&self, data: MenuCreate) -> RepoResult<MenuFull> {
        let price = data
            .price
            .ok_or_else(|| RepoError::Validation("Menu price is required".into()))?;
        if price < 0 {
            return Err(RepoError::Validation(format!(
                "Menu price must not be negative: {price}"
            )));
        }

        if repository::menu_group::find_by_id(&self.pool, data.menu_group_id)
            .await?
            .is_none()
        {
            return Err(RepoError::Validation(format!(
                "Menu group {} does not exist",
                data.menu_group_id
            )));
        }

        let mut total: i64 = 0;
        for mp in &data.menu_products {
            let product = repository::product::find_by_id(&self.pool, mp.product_id)
                .await?
                .ok_or_else(|| {
                    RepoError::Validation(format!("Product {} does not exist", mp.product_id))
                })?;
            total += mp.quantity * product.price;
        }
        if price > total {
            return Err(RepoError::Validation(format!(
                "Menu price {price} exceeds the line product total {total}"
            )));
        }

        let menu = repository::menu::create(
            &self.pool,
            &data.name,
            price,
            data.menu_group_id,
            &data.menu_products,
        )
        .await?;
        let menu_products = repository::menu::find_products(&self.pool, menu.id).await?;
        tracing::info!("Menu created: {} ({})", menu.name, menu.id);

        Ok(MenuFull {
            id: menu.id,
            name: menu.name,
            price: menu.price,
            menu_group_id: menu.menu_group_id,
            menu_products,
        })
    }

    /// List all menus with their menu product collections
    pub async fn list(&self) -> RepoResult<Vec<MenuFull>> {
        let menus = repository::menu::find_all(&self.pool).await?;
        let mut out = Vec::with_capacity(menus.len());
        for menu in menus {
            let menu_products = repository::menu::find_products(&self.pool, menu.id).await?;
            out.push(MenuFull {
                id: menu.id,
                name: menu.name,
                price: menu.price,
                menu_group_id: menu.menu_group_id,
                menu_products,
            });
        }
        Ok(out)
    }
}
