//! # HTTP Resource Layer
//!
//! Maps HTTP verbs and paths onto Author Service calls and serializes the
//! results to JSON with fixed message strings.
//!
//! # Endpoints
//!
//! - `GET /authors` - list all authors
//! - `GET /authors/{id}` - one author, wrapped in a single-element array
//! - `POST /authors` - create an author
//! - `PUT /authors/{id}/works` - append a work id
//! - `PUT /authors/{id}/deleteWork` - remove a work id
//! - `GET /health` - health check

pub mod author_routes;
pub mod config;
pub mod response;
pub mod server;

pub use author_routes::{author_routes, AuthorState};
pub use config::HttpServerConfig;
pub use server::HttpServer;
