//! Uploads Config

use std::path::PathBuf;

use clap::Args;
use groomerlink_app::domain::photos::DEFAULT_MAX_PHOTO_BYTES;

/// Photo upload settings.
#[derive(Debug, Args)]
pub struct UploadsConfig {
    /// Directory uploaded photos are written to and served from.
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,

    /// Largest accepted photo in bytes.
    #[arg(long, env = "UPLOAD_MAX_BYTES", default_value_t = DEFAULT_MAX_PHOTO_BYTES)]
    pub upload_max_bytes: u64,
}
