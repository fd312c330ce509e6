//! PostgreSQL-backed catalog store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::item::{Item, NewItem};
use crate::store::{CatalogStore, StoreError};

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = "\
    id, name, item_type, description, \
    cover_image, additional_images, created_at, updated_at";

/// Catalog store backed by the `items` table.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcard characters so a search term matches as a literal
/// substring.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn create(&self, draft: NewItem) -> Result<Item, StoreError> {
        let draft = draft.validated()?;

        // created_at and updated_at both come from the same DEFAULT now(),
        // so a freshly created record always has created_at == updated_at.
        let query = format!(
            "INSERT INTO items (name, item_type, description, cover_image, additional_images) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ITEM_COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&draft.name)
            .bind(&draft.item_type)
            .bind(&draft.description)
            .bind(draft.cover_image.as_deref())
            .bind(&draft.additional_images)
            .fetch_one(&self.pool)
            .await?;

        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC, id DESC"
        );
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn search(&self, term: &str) -> Result<Vec<Item>, StoreError> {
        let pattern = format!("%{}%", escape_like(term));

        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE name ILIKE $1 OR item_type ILIKE $1 OR description ILIKE $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let items = sqlx::query_as::<_, Item>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
