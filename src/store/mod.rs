//! # Product Store
//!
//! Data access layer for the products table. The store holds no state of
//! its own; the database is the single source of truth.

mod errors;
mod product;

pub use errors::{StoreError, StoreResult};
pub use product::{
    InMemoryProductStore, Product, ProductInput, ProductStore, SqlProductStore, LIST_LIMIT,
};
