//! Multipart upload policy for item images.
//!
//! The create-item form carries three text fields (`itemName`, `itemType`,
//! `itemDescription`) and two file fields (`coverImage`, at most one file;
//! `additionalImages`, at most ten). Every file must declare an `image/*`
//! MIME type and stay under [`MAX_FILE_SIZE`].
//!
//! Files are buffered in memory while the form is drained and only written
//! to disk once the whole request has passed validation, so a rejected file
//! aborts the create before anything lands on disk and before any record is
//! persisted.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::multipart::Field;
use axum::extract::Multipart;
use curio_core::naming::stored_filename;

use crate::error::AppError;

/// Maximum size of a single uploaded file (5 MiB).
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Maximum number of `additionalImages` files per request.
pub const MAX_ADDITIONAL_IMAGES: usize = 10;

/// Cap on the whole multipart body: one cover image, ten additional images,
/// text fields, and multipart framing.
pub const MAX_BODY_SIZE: usize = 64 * 1024 * 1024;

/// Upload policy violations. All map to HTTP 400.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// A file exceeded [`MAX_FILE_SIZE`].
    #[error("File too large")]
    FileTooLarge,

    /// A file field carried a non-image MIME type.
    #[error("Only image files are allowed")]
    NotAnImage,

    /// More files than the field accepts.
    #[error("Field {field} accepts at most {limit} file(s)")]
    TooManyFiles { field: &'static str, limit: usize },

    /// A multipart field this endpoint does not recognize.
    #[error("Unexpected field: {0}")]
    UnexpectedField(String),
}

/// An uploaded file held in memory until the whole request validates.
#[derive(Debug)]
pub struct BufferedFile {
    /// Collision-safe filename the file will be stored under.
    pub stored_name: String,
    pub data: Bytes,
}

/// Text fields and buffered files extracted from the create-item form.
#[derive(Debug, Default)]
pub struct ItemForm {
    pub item_name: Option<String>,
    pub item_type: Option<String>,
    pub item_description: Option<String>,
    pub cover_image: Option<BufferedFile>,
    pub additional_images: Vec<BufferedFile>,
}

/// Drain a multipart request into an [`ItemForm`], enforcing the upload
/// policy along the way.
pub async fn parse_item_form(mut multipart: Multipart) -> Result<ItemForm, AppError> {
    let mut form = ItemForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            return Err(UploadError::UnexpectedField("<unnamed>".to_string()).into());
        };

        // Browsers send an empty part for an unselected file input.
        if field.file_name().is_some_and(str::is_empty) {
            continue;
        }

        match name.as_str() {
            "itemName" => form.item_name = Some(text_value(field).await?),
            "itemType" => form.item_type = Some(text_value(field).await?),
            "itemDescription" => form.item_description = Some(text_value(field).await?),

            "coverImage" => {
                if form.cover_image.is_some() {
                    return Err(UploadError::TooManyFiles {
                        field: "coverImage",
                        limit: 1,
                    }
                    .into());
                }
                form.cover_image = Some(read_image_field(field, "coverImage").await?);
            }

            "additionalImages" => {
                if form.additional_images.len() >= MAX_ADDITIONAL_IMAGES {
                    return Err(UploadError::TooManyFiles {
                        field: "additionalImages",
                        limit: MAX_ADDITIONAL_IMAGES,
                    }
                    .into());
                }
                form.additional_images
                    .push(read_image_field(field, "additionalImages").await?);
            }

            other => return Err(UploadError::UnexpectedField(other.to_string()).into()),
        }
    }

    Ok(form)
}

/// Write buffered files into the upload directory. Called only after the
/// whole request has passed validation.
pub async fn persist_files<'a, I>(dir: &Path, files: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = &'a BufferedFile>,
{
    for file in files {
        let dest = dir.join(&file.stored_name);
        tokio::fs::write(&dest, &file.data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;
    }

    Ok(())
}

async fn text_value(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Read one image file field, enforcing the MIME and size policy, and
/// assign its stored filename.
async fn read_image_field(
    field: Field<'_>,
    field_name: &'static str,
) -> Result<BufferedFile, AppError> {
    let original_name = field.file_name().unwrap_or_default().to_string();

    let is_image = field
        .content_type()
        .is_some_and(|ct| ct.starts_with("image/"));
    if !is_image {
        return Err(UploadError::NotAnImage.into());
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if data.len() > MAX_FILE_SIZE {
        return Err(UploadError::FileTooLarge.into());
    }

    Ok(BufferedFile {
        stored_name: stored_filename(field_name, &original_name),
        data,
    })
}
