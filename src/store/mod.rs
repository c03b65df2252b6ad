//! Store Module
//!
//! Provides the in-memory key-value mapping backing the HTTP API.

mod kv;


pub use kv::KvStore;

// == Public Constants ==
/// Maximum allowed request body size in bytes
pub const MAX_BODY_SIZE: usize = 1024 * 1024; // 1 MB
