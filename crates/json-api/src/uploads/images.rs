//! Stored image serving.

use std::path::Path;

use salvo::{Router, serve_static::StaticDir};

use crate::uploads::IMAGES_PATH;

/// Serve files from `dir` under `/images/{file}`.
pub(crate) fn router(dir: &Path) -> Router {
    Router::with_path(format!("{IMAGES_PATH}/{{**path}}"))
        .get(StaticDir::new([dir.to_path_buf()]).auto_list(false))
}
