//! Upload Errors

use salvo::http::StatusError;
use tracing::error;

use groomerlink_app::domain::photos::PhotosError;

pub(crate) fn into_status_error(error: PhotosError) -> StatusError {
    match error {
        PhotosError::UnsupportedContentType(_) => StatusError::unsupported_media_type()
            .brief("Only JPEG, PNG and WebP photos are accepted"),
        PhotosError::TooLarge { limit, .. } => StatusError::payload_too_large()
            .brief(format!("Photos may be at most {limit} bytes")),
        PhotosError::Io(source) => {
            error!("photo storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
