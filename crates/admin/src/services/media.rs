//! Filesystem blob store for uploaded media.
//!
//! Objects live under the configured media root at
//! `images/{timestamp}_{originalFileName}` and are served publicly by the
//! site binary. The metadata record in the `media` collection is a
//! secondary index over these blobs; delete clears the blob first and
//! tolerates it already being gone, so a half-deleted pair can always be
//! cleaned up by deleting again.

use std::path::{Path, PathBuf};

use chrono::Utc;
use noor_core::collections::media_object_path;
use thiserror::Error;

/// Errors from the blob store.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The object path escapes the media root.
    #[error("invalid object path: {0}")]
    InvalidPath(String),
}

/// A stored blob: where it lives and where it is served from.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    /// Object path relative to the media root.
    pub storage_path: String,
    /// Public URL the site serves the blob from.
    pub public_url: String,
}

/// Filesystem-backed blob store.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    /// Create a store rooted at `root`, serving from `public_base`.
    #[must_use]
    pub const fn new(root: PathBuf, public_base: String) -> Self {
        Self { root, public_base }
    }

    /// Save a blob under a fresh timestamped object path.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::Io` if the directory or file cannot be written.
    pub async fn save(
        &self,
        original_file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredBlob, MediaError> {
        let storage_path = media_object_path(Utc::now().timestamp_millis(), original_file_name);
        let full_path = self.resolve(&storage_path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full_path, bytes).await?;

        Ok(StoredBlob {
            public_url: format!("{}/{storage_path}", self.public_base),
            storage_path,
        })
    }

    /// Delete a blob, succeeding if it is already gone.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::Io` for any failure other than the blob being
    /// absent.
    pub async fn delete(&self, storage_path: &str) -> Result<(), MediaError> {
        let full_path = self.resolve(storage_path)?;

        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(storage_path, "blob already absent, treating delete as done");
                Ok(())
            }
            Err(err) => Err(MediaError::Io(err)),
        }
    }

    /// Resolve an object path against the root, rejecting traversal.
    fn resolve(&self, storage_path: &str) -> Result<PathBuf, MediaError> {
        let relative = Path::new(storage_path);
        if relative
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(MediaError::InvalidPath(storage_path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> MediaStore {
        let dir = std::env::temp_dir().join(format!("noor-media-{}", uuid::Uuid::new_v4()));
        MediaStore::new(dir, "/media".to_string())
    }

    #[tokio::test]
    async fn test_save_writes_blob_under_images() {
        let store = temp_store();
        let blob = store.save("gala.jpg", b"jpegdata").await.unwrap();

        assert!(blob.storage_path.starts_with("images/"));
        assert!(blob.storage_path.ends_with("_gala.jpg"));
        assert_eq!(blob.public_url, format!("/media/{}", blob.storage_path));

        let on_disk = tokio::fs::read(store.root.join(&blob.storage_path))
            .await
            .unwrap();
        assert_eq!(on_disk, b"jpegdata");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = temp_store();
        let blob = store.save("gala.jpg", b"jpegdata").await.unwrap();

        store.delete(&blob.storage_path).await.unwrap();
        // Second delete: blob already absent, still succeeds.
        store.delete(&blob.storage_path).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_of_never_existing_blob_succeeds() {
        let store = temp_store();
        store.delete("images/123_never-there.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let store = temp_store();
        assert!(matches!(
            store.delete("../outside.txt").await,
            Err(MediaError::InvalidPath(_))
        ));
    }
}
