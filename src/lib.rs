//! # Email Template Builder — document model & HTML compiler
//!
//! The core of an email template builder: a canonical JSON document shape
//! that round-trips editor state through storage, and a deterministic
//! compiler from that document to a standalone HTML file suitable for
//! email clients.
//!
//! ## Features
//! - Immutable [`TemplateDocument`] value with pure `with_*` transitions
//! - Total deserialization: any text resolves to a valid document, with
//!   legacy plain-text and flat-shape records handled by ordered fallbacks
//! - Byte-stable HTML compilation with inline section styles and a static
//!   rich-text compatibility CSS block
//! - Narrow collaborator contracts for storage and image upload, with
//!   in-memory reference implementations
//!
//! ## Example
//! ```ignore
//! use email_builder::{compile, deserialize, serialize, SectionKind, TemplateDocument};
//!
//! let doc = TemplateDocument::new("Spring Sale")
//!     .with_section(SectionKind::Header, "<h1>Big news</h1>")
//!     .with_section(SectionKind::Content, "<p>Everything is 20% off.</p>");
//!
//! let stored = serialize(&doc);
//! let restored = deserialize(&stored, None);
//! assert_eq!(restored, doc);
//!
//! let html = compile(&doc, "http://localhost:5000");
//! assert!(html.contains("<h1>Big news</h1>"));
//! ```

pub mod codec;
pub mod document;
pub mod error;
pub mod render;
pub mod store;
pub mod style;

// --- Core types ---
pub use document::{SectionKind, Sections, TemplateDocument};
pub use error::{TemplateError, TemplateResult};
pub use store::{
    ImageUploader, MemoryStore, MemoryUploader, StoredTemplate, TemplateStore, UploadedImage,
    MAX_IMAGE_BYTES,
};
pub use style::{Alignment, ImageDescriptor, SectionStyle, StyleSheet};

/// Serialize a document to its persisted JSON text
pub fn serialize(doc: &TemplateDocument) -> String {
    codec::serialize(doc)
}

/// Deserialize persisted text into a document — total over arbitrary input
///
/// `legacy_image_url` is the stored record's `imageUrl` column, used only
/// when the text itself carries no url.
pub fn deserialize(text: &str, legacy_image_url: Option<&str>) -> TemplateDocument {
    codec::deserialize(text, legacy_image_url)
}

/// Rebuild the editing document for a stored record
pub fn from_stored(stored: &StoredTemplate) -> TemplateDocument {
    codec::from_stored(stored)
}

/// Compile a document into a standalone HTML email file
pub fn compile(doc: &TemplateDocument, base_url: &str) -> String {
    render::compile(doc, base_url)
}

/// Lower-case a title and collapse whitespace runs into hyphens
pub fn slugify(title: &str) -> String {
    render::slugify(title)
}

/// Suggested download filename: `{slug}-template.html`
pub fn suggested_filename(title: &str) -> String {
    render::suggested_filename(title)
}
