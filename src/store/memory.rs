//! In-memory product store for tests and database-free demos.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use crate::error::AppError;
use crate::store::{NewProduct, Product, ProductListItem, ProductStore, ProductUpdate};

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Product>,
}

/// Product store backed by a `Vec` behind a lock. Ids are assigned
/// sequentially starting at 1, matching the table's identity column.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<ProductListItem>, AppError> {
        let inner = self.inner.read().unwrap();
        let mut items: Vec<ProductListItem> = inner
            .rows
            .iter()
            .map(|p| ProductListItem {
                id: p.id,
                name: p.name.clone(),
                price: p.price,
                availability: p.availability,
            })
            .collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(items)
    }

    async fn find(&self, id: i32) -> Result<Option<Product>, AppError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.write().unwrap();
        inner.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: inner.next_id,
            name: new.name,
            price: new.price,
            availability: true,
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().unwrap();
        let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        row.name = changes.name;
        row.price = changes.price;
        row.availability = changes.availability;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().unwrap();
        let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        row.availability = availability;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id);
        Ok(inner.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> NewProduct {
        NewProduct {
            name: "Monitor".to_string(),
            price: 800.0,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_defaults_availability() {
        let store = MemoryStore::new();
        let a = store.create(monitor()).await.unwrap();
        let b = store.create(monitor()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.availability);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id_descending() {
        let store = MemoryStore::new();
        store.create(monitor()).await.unwrap();
        store.create(monitor()).await.unwrap();
        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let store = MemoryStore::new();
        let p = store.create(monitor()).await.unwrap();
        let updated = store
            .update(
                p.id,
                ProductUpdate {
                    name: "Teclado".to_string(),
                    price: 120.0,
                    availability: false,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Teclado");
        assert_eq!(updated.price, 120.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn missing_ids_return_none_or_false() {
        let store = MemoryStore::new();
        assert!(store.find(99).await.unwrap().is_none());
        assert!(store.set_availability(99, false).await.unwrap().is_none());
        assert!(!store.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = MemoryStore::new();
        let p = store.create(monitor()).await.unwrap();
        assert!(store.delete(p.id).await.unwrap());
        assert!(store.find(p.id).await.unwrap().is_none());
    }
}
