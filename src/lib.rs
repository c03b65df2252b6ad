//! memkv - A minimal in-memory key-value store served over HTTP
//!
//! Exposes a JSON key-value API, a health-check endpoint and a static
//! landing page. State lives only in process memory.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
