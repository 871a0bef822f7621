//! Shared types for the POS backend
//!
//! Data models, response DTOs, and utility helpers used by the server crate
//! and, over the wire, by clients. DB row types derive `sqlx::FromRow`
//! behind the `db` feature so wire-only consumers stay sqlx-free.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
