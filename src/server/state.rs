//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `BlobStore` only holds the storage root
//! - `TokenService` holds the HMAC keys and URL settings

use sea_orm::DatabaseConnection;

use crate::server::{data::blob::BlobStore, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Filesystem store holding document and profile picture bytes.
    pub blobs: BlobStore,

    /// Issues and verifies access tokens and signed storage URLs.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, blobs: BlobStore, tokens: TokenService) -> Self {
        Self { db, blobs, tokens }
    }
}
