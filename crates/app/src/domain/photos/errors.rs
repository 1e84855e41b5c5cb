//! Photos service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("unsupported content type {0:?}, expected JPEG, PNG or WebP")]
    UnsupportedContentType(String),

    #[error("photo is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("photo storage error")]
    Io(#[from] std::io::Error),
}
