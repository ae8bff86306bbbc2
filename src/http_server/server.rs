//! # HTTP Server
//!
//! Router assembly and the serving loop for the product API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::store::ProductStore;

use super::config::HttpServerConfig;
use super::product_routes::{product_routes, ProductState};

/// HTTP server for the product API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: Arc<dyn ProductStore>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with all product endpoints
    fn build_router(store: Arc<dyn ProductStore>) -> Router {
        let state = Arc::new(ProductState::new(store));
        Router::new().merge(product_routes(state))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async); any listener failure is fatal
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // Trailing slashes are trimmed before routing, so /product/ and
        // /product hit the same handler.
        let app = NormalizePathLayer::trim_trailing_slash().layer(self.router);

        println!("Starting stockroom HTTP server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;

    fn test_store() -> Arc<dyn ProductStore> {
        Arc::new(InMemoryProductStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8010");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(test_store(), config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(test_store());
        let _router = server.router();
    }
}
