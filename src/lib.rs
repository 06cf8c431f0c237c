//! Supplier CRUD REST service library.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod state;
pub mod validation;

pub use config::ServiceConfig;
pub use error::AppError;
pub use model::{Supplier, SupplierDraft};
pub use repository::{SupplierRepository, SupplierSort};
pub use routes::{app_router, common_routes, supplier_routes};
pub use schema::{ensure_database_exists, ensure_supplier_table};
pub use state::AppState;
