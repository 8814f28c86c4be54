use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{TemplateError, TemplateResult};

/// Upload size ceiling: 5 MiB
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// One persisted template record
///
/// `content` is the serialized document text and is opaque to the store;
/// only the codec interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTemplate {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful image upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Collaborator-relative url (`/uploads/...`), absolutized at compile time
    pub url: String,
}

/// Storage collaborator contract
///
/// The one ordering guarantee a backend must provide is read-after-write:
/// a `list` issued after a `save` observes that save.
pub trait TemplateStore {
    /// Persist a template, returning the stored record
    fn save(&mut self, title: &str, content: &str, image_url: &str)
        -> TemplateResult<StoredTemplate>;

    /// All stored templates, newest first
    fn list(&self) -> TemplateResult<Vec<StoredTemplate>>;

    /// Delete by id; `NotFound` when no such record exists
    fn delete(&mut self, id: Uuid) -> TemplateResult<()>;
}

/// Upload collaborator contract
pub trait ImageUploader {
    /// Store image bytes under a generated unique filename
    fn upload(&mut self, bytes: &[u8], original_filename: &str) -> TemplateResult<UploadedImage>;
}

/// Check upload constraints: image-only file types and the size ceiling
///
/// Backends call this before storing anything; the generated filename is
/// `{uuid}{original extension}`.
pub fn validate_upload(bytes: &[u8], original_filename: &str) -> TemplateResult<String> {
    static IMAGE_EXT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = IMAGE_EXT_REGEX
        .get_or_init(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif)$").unwrap());

    if !re.is_match(original_filename) {
        warn!(filename = original_filename, "rejected non-image upload");
        return Err(TemplateError::UnsupportedImageType {
            filename: original_filename.to_string(),
        });
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        warn!(size = bytes.len(), "rejected oversized upload");
        return Err(TemplateError::ImageTooLarge {
            size: bytes.len(),
            max_bytes: MAX_IMAGE_BYTES,
        });
    }

    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    Ok(format!("{}.{}", Uuid::new_v4(), ext))
}

/// In-memory template store, used by the tests and the export CLI
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<StoredTemplate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryStore {
    fn save(
        &mut self,
        title: &str,
        content: &str,
        image_url: &str,
    ) -> TemplateResult<StoredTemplate> {
        if title.trim().is_empty() {
            return Err(TemplateError::EmptyTitle);
        }
        let record = StoredTemplate {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            image_url: image_url.to_string(),
            created_at: Utc::now(),
        };
        debug!(id = %record.id, title, "saved template");
        self.records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> TemplateResult<Vec<StoredTemplate>> {
        // Insertion order is creation order; newest first.
        Ok(self.records.iter().rev().cloned().collect())
    }

    fn delete(&mut self, id: Uuid) -> TemplateResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(TemplateError::NotFound { id: id.to_string() });
        }
        debug!(%id, "deleted template");
        Ok(())
    }
}

/// In-memory upload collaborator honoring the real backend's constraints
#[derive(Debug, Default)]
pub struct MemoryUploader {
    uploads: Vec<(String, Vec<u8>)>,
}

impl MemoryUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored uploads
    pub fn len(&self) -> usize {
        self.uploads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }
}

impl ImageUploader for MemoryUploader {
    fn upload(&mut self, bytes: &[u8], original_filename: &str) -> TemplateResult<UploadedImage> {
        let filename = validate_upload(bytes, original_filename)?;
        let url = format!("/uploads/{filename}");
        debug!(%url, size = bytes.len(), "stored upload");
        self.uploads.push((filename, bytes.to_vec()));
        Ok(UploadedImage { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_filenames_are_unique() {
        let a = validate_upload(b"png", "logo.PNG").unwrap();
        let b = validate_upload(b"png", "logo.PNG").unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn test_rejects_non_image_extension() {
        let err = validate_upload(b"binary", "payload.exe").unwrap_err();
        assert!(matches!(err, TemplateError::UnsupportedImageType { .. }));
    }
}
