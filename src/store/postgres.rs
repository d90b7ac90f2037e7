//! PostgreSQL backend for the product store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::store::{NewProduct, Product, ProductListItem, ProductStore, ProductUpdate};

const PRODUCT_COLUMNS: &str = "id, name, price, availability, created_at, updated_at";

/// Create the products table if it does not exist. Safe to run at every start.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            availability BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

/// Product store over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<ProductListItem>, AppError> {
        let rows = sqlx::query_as::<_, ProductListItem>(
            "SELECT id, name, price, availability FROM products ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, new: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(new.name)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = $2, price = $3, availability = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.availability)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET availability = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(availability)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
