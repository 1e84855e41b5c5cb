//! Upload Photo Handler

use salvo::{http::header::CONTENT_LENGTH, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tokio::fs;

use groomerlink_app::domain::photos::{PhotosError, data::NewPhoto};

use crate::{
    extensions::*, observability::record_photo_stored, uploads::errors::into_status_error,
};

/// Multipart field carrying the photo.
const FILE_FIELD: &str = "file";

/// Room for multipart boundaries and part headers on top of the photo itself.
const FORM_OVERHEAD_BYTES: u64 = 16 * 1024;

/// Upload Photo Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadPhotoResponse {
    /// Reference to store in a profile's `photo_ref`
    pub photo_ref: String,
}

/// Upload Photo Handler
///
/// Accepts a `multipart/form-data` body with a single `file` field.
#[endpoint(
    tags("uploads"),
    summary = "Upload Photo",
    responses(
        (status_code = StatusCode::CREATED, description = "Photo stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing file"),
        (status_code = StatusCode::PAYLOAD_TOO_LARGE, description = "Photo too large"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Not a JPEG, PNG or WebP image"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UploadPhotoResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let body_limit = state.upload_max_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    let declared_length = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    if let Some(size) = declared_length.filter(|size| *size > body_limit) {
        return Err(into_status_error(PhotosError::TooLarge {
            size,
            limit: state.upload_max_bytes,
        }));
    }

    let form = req
        .form_data_max_size(usize::try_from(body_limit).unwrap_or(usize::MAX))
        .await
        .or_400("Expected a multipart form")?;

    let file = form
        .files
        .get(FILE_FIELD)
        .ok_or_else(|| StatusError::bad_request().brief("Missing file field"))?;

    if file.size() > state.upload_max_bytes {
        return Err(into_status_error(PhotosError::TooLarge {
            size: file.size(),
            limit: state.upload_max_bytes,
        }));
    }

    let content_type = file
        .content_type()
        .map(|mime| mime.to_string())
        .unwrap_or_default();

    let bytes = fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let stored = state
        .app
        .photos
        .store_photo(NewPhoto {
            content_type,
            bytes,
        })
        .await
        .map_err(into_status_error)?;

    record_photo_stored();

    res.status_code(StatusCode::CREATED);

    Ok(Json(UploadPhotoResponse {
        photo_ref: stored.photo_ref,
    }))
}
