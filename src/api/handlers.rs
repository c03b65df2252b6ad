//! API Handlers
//!
//! HTTP request handlers for each endpoint of the key-value service.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::Uri,
    response::Html,
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use super::index_page;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DeleteResponse, EntryResponse, HealthResponse, PutRequest};
use crate::store::KvStore;

/// Application state shared across all handlers.
///
/// The store is wrapped in Arc<RwLock<>> for safe access from concurrent
/// requests; every endpoint operation is a single-key step under the lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe key-value store
    pub store: Arc<RwLock<KvStore>>,
    /// Port the server listens on, reported by /healthz and the landing page
    pub port: u16,
    /// Process start marker used for the uptime figure
    started_at: Instant,
}

impl AppState {
    /// Creates a new AppState with an empty store.
    pub fn new(port: u16) -> Self {
        Self {
            store: Arc::new(RwLock::new(KvStore::new())),
            port,
            started_at: Instant::now(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.port)
    }
}

/// Handler for GET /kv/:key
///
/// Retrieves the value stored under the key; 404 if absent.
pub async fn get_kv_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryResponse>> {
    let store = state.store.read().await;
    let value = store.get(&key)?;

    Ok(Json(EntryResponse::new(key, value)))
}

/// Handler for PUT /kv/:key
///
/// Stores the `value` field of the JSON body under the key, overwriting any
/// prior value. A body without the field is rejected with 400 before the
/// store is touched.
pub async fn put_kv_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: std::result::Result<Json<PutRequest>, JsonRejection>,
) -> Result<Json<EntryResponse>> {
    let Json(request) = payload?;
    let value = request.require_value()?;

    let mut store = state.store.write().await;
    let stored = store.put(key.clone(), value);

    Ok(Json(EntryResponse::new(key, stored)))
}

/// Handler for DELETE /kv/:key
///
/// Removes the key if present. Idempotent: deleting a missing key still
/// succeeds and reports the key as deleted.
pub async fn delete_kv_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.store.write().await;
    let existed = store.delete(&key);
    debug!(%key, existed, "delete");

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /healthz
///
/// Returns a snapshot of process vitals. Pure read, cannot fail.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::capture(
        state.port,
        state.started_at.elapsed(),
    ))
}

/// Handler for GET /
///
/// Serves the static landing page with the configured port filled in.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(index_page::render(state.port))
}

/// Fallback handler for any unmatched method+path.
pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
