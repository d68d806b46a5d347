//! Image Models

use std::path::{Path, PathBuf};

/// An uploaded file waiting to be moved into the image store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Multipart field the file arrived under; becomes the filename prefix.
    pub field_name: String,

    /// Client-supplied filename, used only for its extension.
    pub original_name: Option<String>,

    /// Temporary location of the uploaded bytes.
    pub source: PathBuf,
}

/// Stored Image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub filename: String,
    pub path: PathBuf,
}

/// Build `<field>_<millis><ext>`, keeping the original extension (with its dot).
#[must_use]
pub fn image_filename(field_name: &str, original_name: Option<&str>, millis: i64) -> String {
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{field_name}_{millis}{extension}")
}
