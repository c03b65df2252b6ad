//! API Module
//!
//! HTTP handlers and routing for the key-value service.
//!
//! # Endpoints
//! - `GET /kv/:key` - Retrieve a value by key
//! - `PUT /kv/:key` - Store a value under a key
//! - `DELETE /kv/:key` - Delete a key
//! - `GET /healthz` - Health check with process vitals
//! - `GET /` - Landing page

pub mod handlers;
mod index_page;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
