//! The catalog store: the persistence seam for item records.
//!
//! Handlers hold the store as `Arc<dyn CatalogStore>`, so tests can swap in
//! [`memory::MemoryCatalog`] while production runs on
//! [`postgres::PgCatalogStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use curio_core::error::CoreError;

use crate::models::item::{Item, NewItem};

/// Error type for catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The draft failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The backing store failed.
    #[error("Storage failure: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Durable persistence and retrieval of catalog items.
///
/// Implementations provide single-record write atomicity; no cross-record
/// transaction or ordering guarantee is required, and no operation retries
/// internally.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Validate and persist a draft, assigning `id` and setting
    /// `created_at = updated_at = now`. Returns the stored record.
    ///
    /// A draft with missing or blank required fields fails with
    /// [`StoreError::Validation`] and leaves the store untouched.
    async fn create(&self, draft: NewItem) -> Result<Item, StoreError>;

    /// All items, most recently created first. An empty store yields an
    /// empty vec.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Items whose name, type, or description contains `term` as a
    /// case-insensitive substring. A record matches if any field matches.
    ///
    /// Results are ordered like [`CatalogStore::list_all`] (newest first)
    /// so the two read paths stay consistent and deterministic. Wildcard
    /// characters in `term` match literally, never as patterns.
    async fn search(&self, term: &str) -> Result<Vec<Item>, StoreError>;

    /// Cheap liveness probe of the backing store.
    async fn health_check(&self) -> bool;
}
