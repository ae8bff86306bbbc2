//! # Product Model and Store Implementations
//!
//! The `ProductStore` trait is the boundary between HTTP handlers and SQL.
//! `SqlProductStore` is the production implementation over a MySQL pool;
//! `InMemoryProductStore` backs tests without a running database.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use super::errors::{StoreError, StoreResult};

/// Maximum number of rows a list query will return
pub const LIST_LIMIT: i64 = 10;

/// A product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Client-supplied product fields for create/update.
///
/// The id never comes from the request body. Missing fields fall back to
/// their zero values, matching the tolerant decoding of the original API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

impl ProductInput {
    fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Store trait for product CRUD operations
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List up to [`LIST_LIMIT`] products, ordered by ascending id
    async fn list(&self) -> StoreResult<Vec<Product>>;

    /// Fetch a single product by id
    async fn get(&self, id: i64) -> StoreResult<Product>;

    /// Insert a product and return it with the generated id attached
    async fn create(&self, input: ProductInput) -> StoreResult<Product>;

    /// Overwrite name, quantity and price of the row with the given id.
    ///
    /// A missing row is a silent no-op: the call succeeds and returns the
    /// entity as requested, mutating nothing.
    async fn update(&self, id: i64, input: ProductInput) -> StoreResult<Product>;

    /// Delete the row with the given id. Deleting a missing row succeeds.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

// ==================
// SQL implementation
// ==================

/// MySQL-backed product store
pub struct SqlProductStore {
    pool: MySqlPool,
}

impl SqlProductStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect to the database; failure here is fatal for the caller
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = MySqlPool::connect(url).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ProductStore for SqlProductStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products ORDER BY id LIMIT ?",
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: i64) -> StoreResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, input: ProductInput) -> StoreResult<Product> {
        let result = sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.price)
            .execute(&self.pool)
            .await?;

        Ok(input.with_id(result.last_insert_id() as i64))
    }

    async fn update(&self, id: i64, input: ProductInput) -> StoreResult<Product> {
        // Zero rows matched is deliberately not an error.
        sqlx::query("UPDATE products SET name = ?, quantity = ?, price = ? WHERE id = ?")
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(input.with_id(id))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ==================
// In-memory implementation
// ==================

/// In-memory product store for testing
pub struct InMemoryProductStore {
    inner: Mutex<InMemoryInner>,
}

struct InMemoryInner {
    next_id: i64,
    rows: Vec<Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(InMemoryInner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, InMemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let inner = self.lock()?;
        // Rows are kept in insertion order and ids only grow, so the
        // vector is already sorted by id.
        Ok(inner.rows.iter().take(LIST_LIMIT as usize).cloned().collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Product> {
        let inner = self.lock()?;
        inner
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: ProductInput) -> StoreResult<Product> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let product = input.with_id(id);
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, input: ProductInput) -> StoreResult<Product> {
        let mut inner = self.lock()?;
        let product = input.with_id(id);

        if let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) {
            *row = product.clone();
        }
        // Same silent no-op as the SQL store when no row matches.
        Ok(product)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.lock()?;
        inner.rows.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: i64) -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            quantity,
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = InMemoryProductStore::new();

        let first = store.create(widget(1)).await.unwrap();
        let second = store.create(widget(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let store = InMemoryProductStore::new();

        let created = store.create(widget(5)).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.quantity, 5);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryProductStore::new();
        let err = store.get(42).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_list_is_capped_and_ordered() {
        let store = InMemoryProductStore::new();
        for i in 0..LIST_LIMIT + 2 {
            store.create(widget(i)).await.unwrap();
        }

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), LIST_LIMIT as usize);
        for pair in rows.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = InMemoryProductStore::new();
        let created = store.create(widget(5)).await.unwrap();

        let updated = store.update(created.id, widget(10)).await.unwrap();
        assert_eq!(updated.quantity, 10);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.quantity, 10);
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_a_no_op() {
        let store = InMemoryProductStore::new();

        let result = store.update(99, widget(1)).await.unwrap();
        assert_eq!(result.id, 99);

        // Nothing was actually written.
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(store.get(99).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryProductStore::new();
        let created = store.create(widget(1)).await.unwrap();

        store.delete(created.id).await.unwrap();
        store.delete(created.id).await.unwrap();

        assert!(matches!(
            store.get(created.id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_input_tolerates_missing_fields() {
        let input: ProductInput = serde_json::from_str(r#"{"name": "Widget"}"#).unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.quantity, 0);
        assert_eq!(input.price, 0.0);
    }
}
