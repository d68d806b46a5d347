//! Image Uploads

pub(crate) mod images;
pub(crate) mod upload;

/// Multipart field an uploaded product image arrives under.
pub(crate) const UPLOAD_FIELD: &str = "product";

/// Public path prefix stored images are served from.
pub(crate) const IMAGES_PATH: &str = "images";
