//! Public Profile Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    profiles::{errors::into_status_error, models::ProfileResponse},
};

/// Public Profile Handler
///
/// Returns the public card of a profile by its slug. Owner secrets are never
/// part of the response.
#[endpoint(
    tags("profiles"),
    summary = "Get Public Profile",
    responses(
        (status_code = StatusCode::OK, description = "Profile found"),
        (status_code = StatusCode::NOT_FOUND, description = "Profile not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locator: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let slug = locator.into_slug()?;

    let record = state
        .app
        .profiles
        .get_public_profile(&slug)
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
