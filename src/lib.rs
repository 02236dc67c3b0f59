//! anthology - a small author-catalog REST service
//!
//! Thin HTTP-to-store mapping: axum routes delegate to the author service,
//! which reads and writes through an injected `AuthorStore` handle.

pub mod cli;
pub mod http_server;
pub mod service;
pub mod store;
