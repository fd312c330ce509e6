//! Handlers for the item catalog routes.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use curio_db::models::item::NewItem;

use crate::error::AppResult;
use crate::response::{ItemCreatedResponse, ItemListResponse, ItemView};
use crate::state::AppState;
use crate::upload;

/// Query parameters for the item listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// POST /api/items
///
/// Create an item from a multipart form: text fields `itemName`,
/// `itemType`, `itemDescription`; file fields `coverImage` (at most one)
/// and `additionalImages` (at most ten). Files are written to the upload
/// directory and the record persisted only after the whole request passes
/// validation.
pub async fn create_item(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = upload::parse_item_form(multipart).await?;

    let draft = NewItem {
        name: form.item_name.unwrap_or_default(),
        item_type: form.item_type.unwrap_or_default(),
        description: form.item_description.unwrap_or_default(),
        cover_image: form.cover_image.as_ref().map(|f| f.stored_name.clone()),
        additional_images: form
            .additional_images
            .iter()
            .map(|f| f.stored_name.clone())
            .collect(),
    };

    // Validate before any file lands on disk; the store validates again as
    // part of its own contract.
    let draft = draft.validated()?;

    let files: Vec<&upload::BufferedFile> =
        form.cover_image.iter().chain(&form.additional_images).collect();
    upload::persist_files(&state.config.upload_dir, files).await?;

    let item = state.store.create(draft).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Item created");

    let view = ItemView::new(item, &state.config.public_base_url);

    Ok((
        StatusCode::CREATED,
        Json(ItemCreatedResponse {
            message: "Item successfully added",
            item: view,
        }),
    ))
}

/// GET /api/items?search=<term>
///
/// With a non-empty `search` term, return matching items; otherwise list
/// the whole catalog. Both paths answer newest first.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = match params.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => state.store.search(term).await?,
        _ => state.store.list_all().await?,
    };

    let items: Vec<ItemView> = items
        .into_iter()
        .map(|item| ItemView::new(item, &state.config.public_base_url))
        .collect();

    Ok(Json(ItemListResponse {
        success: true,
        count: items.len(),
        items,
    }))
}
