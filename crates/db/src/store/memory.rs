//! In-memory catalog store.
//!
//! Same observable semantics as the PostgreSQL store, minus durability.
//! Used by the HTTP integration tests and for storeless local runs.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::models::item::{Item, NewItem};
use crate::store::{CatalogStore, StoreError};

/// Catalog store holding all records in process memory.
pub struct MemoryCatalog {
    items: Mutex<Vec<Item>>,
    next_id: AtomicI64,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest first, matching the PostgreSQL store's
/// `ORDER BY created_at DESC, id DESC`.
fn sort_newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn create(&self, draft: NewItem) -> Result<Item, StoreError> {
        let draft = draft.validated()?;

        let now = Utc::now();
        let item = Item {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: draft.name,
            item_type: draft.item_type,
            description: draft.description,
            cover_image: draft.cover_image,
            additional_images: draft.additional_images,
            created_at: now,
            updated_at: now,
        };

        self.items.lock().await.push(item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = self.items.lock().await.clone();
        sort_newest_first(&mut items);
        Ok(items)
    }

    async fn search(&self, term: &str) -> Result<Vec<Item>, StoreError> {
        let needle = term.to_lowercase();

        let mut items: Vec<Item> = self
            .items
            .lock()
            .await
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.item_type.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        sort_newest_first(&mut items);
        Ok(items)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
