//! Persistence gateway for the products table.
//!
//! Handlers depend on the [`ProductStore`] trait, never on a concrete
//! backend; the backend is constructed at bootstrap and injected through
//! `AppState`. [`postgres::PgProductStore`] is the production backend,
//! [`memory::MemoryStore`] backs tests and database-free demos.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_products_table, PgProductStore};

/// A stored product row. Timestamps are maintained by the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 800.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection: the same row without its timestamps.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Create input. Availability is not accepted on create; it defaults to true.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 800.0)]
    pub price: f64,
}

/// Full-update input (PUT): every field required, the row is overwritten.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Row operations over the products table.
///
/// Mutating calls return `None` when the id has no row so callers can map
/// absence to 404. No call wraps more than one statement; the read-then-write
/// pair used by update and toggle is not guarded against concurrent writers.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows ordered by id descending, without timestamps.
    async fn list(&self) -> Result<Vec<ProductListItem>, AppError>;

    /// One row by primary key.
    async fn find(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Insert a row with availability true and a generated id.
    async fn create(&self, new: NewProduct) -> Result<Product, AppError>;

    /// Overwrite name, price and availability of an existing row.
    async fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, AppError>;

    /// Set availability to an explicit value.
    async fn set_availability(&self, id: i32, availability: bool)
        -> Result<Option<Product>, AppError>;

    /// Remove a row. Returns whether a row existed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
