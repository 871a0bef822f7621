//! Application Services
//!
//! The service layer is the crate boundary: each service validates its
//! input against persisted reference data, persists through the
//! repository layer, and returns the saved rows. Wiring is explicit:
//! services are constructed with the pool they run on.

pub mod menu_group_service;
pub mod menu_service;
pub mod order_service;
pub mod product_service;
pub mod table_group_service;
pub mod table_service;

pub use menu_group_service::MenuGroupService;
pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use table_group_service::TableGroupService;
pub use table_service::TableService;
