//! Repository Module
//!
//! CRUD operations over the SQLite store, one module per table.
//! Multi-row aggregates (menu + menu products, order + line items,
//! table group + links) persist inside a single transaction.

// Catalog
pub mod menu;
pub mod menu_group;
pub mod product;

// Floor
pub mod order_table;
pub mod table_group;

// Orders
pub mod order;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
