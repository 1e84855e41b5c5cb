//! Photos service.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::domain::photos::{
    data::{NewPhoto, PhotoContentType, StoredPhoto},
    errors::PhotosError,
};

/// Default upload limit: 5 MiB.
pub const DEFAULT_MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// URL prefix under which stored photos are served.
pub const PHOTOS_PUBLIC_PREFIX: &str = "/uploads";

/// Stores photos as files in a local directory.
#[derive(Debug, Clone)]
pub struct LocalPhotosService {
    root: PathBuf,
    max_bytes: u64,
}

impl LocalPhotosService {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

#[async_trait]
impl PhotosService for LocalPhotosService {
    async fn store_photo(&self, photo: NewPhoto) -> Result<StoredPhoto, PhotosError> {
        let content_type = PhotoContentType::from_mime(&photo.content_type)?;

        let size = u64::try_from(photo.bytes.len()).unwrap_or(u64::MAX);

        if size > self.max_bytes {
            return Err(PhotosError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        fs::create_dir_all(&self.root).await?;

        let file_name = format!("{}.{}", Uuid::now_v7(), content_type.extension());

        fs::write(self.root.join(&file_name), &photo.bytes).await?;

        info!(file = %file_name, size, "stored photo");

        Ok(StoredPhoto {
            photo_ref: format!("{PHOTOS_PUBLIC_PREFIX}/{file_name}"),
            file_name,
        })
    }
}

#[automock]
#[async_trait]
pub trait PhotosService: Send + Sync {
    /// Validates and stores an uploaded photo, returning its public reference.
    async fn store_photo(&self, photo: NewPhoto) -> Result<StoredPhoto, PhotosError>;
}
