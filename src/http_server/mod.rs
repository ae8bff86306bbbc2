//! # HTTP Server Module
//!
//! Axum HTTP surface for the product CRUD API.
//!
//! # Endpoints
//!
//! - `GET /products` - Capped, id-ordered product listing
//! - `GET /product/{id}` - Fetch one product
//! - `POST /product` - Create a product
//! - `PUT /product/{id}` - Overwrite a product
//! - `DELETE /product/{id}` - Remove a product

pub mod config;
pub mod errors;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use product_routes::{product_routes, ProductState};
pub use server::HttpServer;
