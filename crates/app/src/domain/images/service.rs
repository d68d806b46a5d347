//! Images service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::fs;
use tracing::info;

use crate::domain::images::{
    errors::ImagesServiceError,
    models::{ImageUpload, StoredImage, image_filename},
};

/// Image store backed by a local directory.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    /// Open the store, creating `dir` when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ImagesServiceError::Directory`] when the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, ImagesServiceError> {
        let dir = dir.into();

        fs::create_dir_all(&dir)
            .await
            .map_err(|source| ImagesServiceError::Directory {
                path: dir.clone(),
                source,
            })?;

        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ImagesService for LocalImageStore {
    async fn store_image(&self, upload: ImageUpload) -> Result<StoredImage, ImagesServiceError> {
        let filename = image_filename(
            &upload.field_name,
            upload.original_name.as_deref(),
            Timestamp::now().as_millisecond(),
        );

        let path = self.dir.join(&filename);

        let bytes = fs::copy(&upload.source, &path)
            .await
            .map_err(|source| ImagesServiceError::Store {
                filename: filename.clone(),
                source,
            })?;

        info!(%filename, bytes, "image stored");

        Ok(StoredImage { filename, path })
    }
}

#[automock]
#[async_trait]
pub trait ImagesService: Send + Sync {
    /// Copy an uploaded file into the store under a generated name.
    async fn store_image(&self, upload: ImageUpload) -> Result<StoredImage, ImagesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn open_creates_missing_directories() -> TestResult {
        let root = tempfile::tempdir()?;
        let dir = root.path().join("upload").join("images");

        let store = LocalImageStore::open(&dir).await?;

        assert!(store.dir().is_dir());

        Ok(())
    }

    #[tokio::test]
    async fn stored_image_has_the_uploaded_bytes() -> TestResult {
        let root = tempfile::tempdir()?;
        let source = root.path().join("incoming");
        std::fs::write(&source, b"not really a png")?;

        let store = LocalImageStore::open(root.path().join("images")).await?;

        let stored = store
            .store_image(ImageUpload {
                field_name: "product".to_owned(),
                original_name: Some("shirt.png".to_owned()),
                source,
            })
            .await?;

        assert!(stored.filename.starts_with("product_"));
        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.path, store.dir().join(&stored.filename));
        assert_eq!(std::fs::read(&stored.path)?, b"not really a png");

        Ok(())
    }

    #[tokio::test]
    async fn missing_source_is_a_store_error() -> TestResult {
        let root = tempfile::tempdir()?;
        let store = LocalImageStore::open(root.path()).await?;

        let result = store
            .store_image(ImageUpload {
                field_name: "product".to_owned(),
                original_name: None,
                source: root.path().join("gone"),
            })
            .await;

        assert!(matches!(result, Err(ImagesServiceError::Store { .. })));

        Ok(())
    }
}
