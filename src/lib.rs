//! stockroom - A small product-inventory CRUD service over HTTP and MySQL

pub mod cli;
pub mod config;
pub mod http_server;
pub mod store;
