//! Typed response envelopes for the item routes.
//!
//! Wire shapes are fixed: the create route answers with a `message`/`item`
//! pair, the list route with `success`/`count`/`items`. Use these instead
//! of ad-hoc `serde_json::json!` so the shapes stay consistent.

use curio_db::models::item::Item;
use serde::Serialize;

/// A stored item with its image references rewritten into fully-qualified
/// `/uploads` URLs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub cover_image_url: Option<String>,
    pub additional_image_urls: Vec<String>,
}

impl ItemView {
    pub fn new(item: Item, public_base_url: &str) -> Self {
        let cover_image_url = item
            .cover_image
            .as_deref()
            .map(|f| upload_url(public_base_url, f));
        let additional_image_urls = item
            .additional_images
            .iter()
            .map(|f| upload_url(public_base_url, f))
            .collect();

        Self {
            item,
            cover_image_url,
            additional_image_urls,
        }
    }
}

fn upload_url(base: &str, filename: &str) -> String {
    format!("{base}/uploads/{filename}")
}

/// Response body for `POST /api/items`.
#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    pub message: &'static str,
    pub item: ItemView,
}

/// Response body for `GET /api/items`.
#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub items: Vec<ItemView>,
}
