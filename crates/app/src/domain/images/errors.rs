//! Images service errors.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagesServiceError {
    #[error("failed to prepare image directory {}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to store image {filename}")]
    Store {
        filename: String,
        #[source]
        source: io::Error,
    },
}
