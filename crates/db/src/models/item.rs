//! Catalog item model and creation DTO.

use curio_core::error::CoreError;
use curio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
///
/// Image fields hold stored filenames, not URLs; the HTTP surface rewrites
/// them into retrievable URLs on the way out.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub additional_images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
///
/// Image references are stored filenames already resolved by the upload
/// handler. The three text fields are validated by [`NewItem::validated`]
/// before anything is persisted.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub item_type: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub additional_images: Vec<String>,
}

impl NewItem {
    /// Trim the three required text fields and reject the draft if any of
    /// them ends up blank, naming every offending field by its form field
    /// name.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        self.item_type = self.item_type.trim().to_string();
        self.description = self.description.trim().to_string();

        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("itemName");
        }
        if self.item_type.is_empty() {
            missing.push("itemType");
        }
        if self.description.is_empty() {
            missing.push("itemDescription");
        }

        if missing.is_empty() {
            Ok(self)
        } else {
            Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
