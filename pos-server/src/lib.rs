//! POS Server - restaurant point-of-sale backend
//!
//! Application services over a SQLite store: catalog (products, menu
//! groups, menus), floor management (order tables, table groups), and the
//! order lifecycle. HTTP routing and client concerns live outside this
//! crate; the service structs in [`services`] are the boundary.
//!
//! # Module structure
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置
//! ├── db/            # 数据库层 (pool, migrations, repositories)
//! ├── services/      # 应用服务 (校验 + 持久化)
//! └── utils/         # 日志等工具
//! ```

pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use db::DbService;
pub use db::repository::{RepoError, RepoResult};
pub use services::{
    MenuGroupService, MenuService, OrderService, ProductService, TableGroupService, TableService,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
