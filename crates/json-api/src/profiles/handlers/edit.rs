//! Profile For Edit Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use groomerlink_app::domain::profiles::ownership::OwnerSecret;

use crate::{
    extensions::*,
    profiles::{errors::into_status_error, models::ProfileResponse},
};

/// Profile For Edit Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EditProfileRequest {
    /// Email address given when the profile was created
    pub owner_secret: String,
}

/// Profile For Edit Handler
///
/// Returns the full profile when the owner secret matches. A wrong secret and
/// an unknown profile both answer 404.
#[endpoint(
    tags("profiles"),
    summary = "Get Profile For Edit",
    responses(
        (status_code = StatusCode::OK, description = "Profile found"),
        (status_code = StatusCode::NOT_FOUND, description = "Profile not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locator: PathParam<String>,
    json: JsonBody<EditProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let locator = locator.into_locator()?;

    let secret = OwnerSecret::new(json.into_inner().owner_secret);

    let record = state
        .app
        .profiles
        .get_profile_for_edit(&locator, &secret)
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
