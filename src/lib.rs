//! Productos API: REST CRUD over a single products table, with declarative
//! request validation, generated OpenAPI documentation, and a swappable
//! persistence gateway.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, FieldError};
pub use routes::{app, product_routes};
pub use state::AppState;
pub use store::{ensure_products_table, MemoryStore, PgProductStore, ProductStore};
