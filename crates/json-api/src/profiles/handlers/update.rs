//! Update Profile Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use groomerlink_app::domain::profiles::{
    data::{ProfileContent, ProfileUpdate},
    ownership::OwnerSecret,
    validation::{FieldError, validate_owner_secret},
};

use crate::{
    extensions::*,
    profiles::{
        errors::into_status_error,
        models::{OpeningHoursBody, ProfileLocationResponse, ServiceOfferingBody},
    },
};

/// Update Profile Request
///
/// Carries the complete content; omitted optional fields are cleared.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    /// Current owner email address
    pub owner_secret: String,

    pub display_name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub social_handle: Option<String>,
    pub address: String,
    #[serde(default)]
    pub photo_ref: Option<String>,
    #[serde(default)]
    pub hours: Vec<OpeningHoursBody>,
    #[serde(default)]
    pub services: Vec<ServiceOfferingBody>,

    /// New slug; the current one is kept when absent
    #[serde(default, alias = "identifier")]
    pub slug: Option<String>,

    /// Replacement owner email address; blank or absent keeps the current one
    #[serde(default)]
    pub new_owner_secret: Option<String>,
}

impl UpdateProfileRequest {
    fn into_parts(self) -> Result<(OwnerSecret, ProfileUpdate), FieldError> {
        let new_owner_secret = self
            .new_owner_secret
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
            .map(validate_owner_secret)
            .transpose()?;

        let slug = self.slug.filter(|slug| !slug.trim().is_empty());

        let update = ProfileUpdate {
            slug,
            new_owner_secret,
            content: ProfileContent {
                display_name: self.display_name,
                business_name: self.business_name,
                phone: self.phone,
                social_handle: self.social_handle,
                address: self.address,
                photo_ref: self.photo_ref,
                hours: self.hours.into_iter().map(Into::into).collect(),
                services: self.services.into_iter().map(Into::into).collect(),
            },
        };

        Ok((OwnerSecret::new(self.owner_secret), update))
    }
}

/// Update Profile Handler
///
/// Replaces the content of a profile, optionally moving it to a new slug
/// or handing it to a new owner secret.
#[endpoint(
    tags("profiles"),
    summary = "Update Profile",
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid identifier or field"),
        (status_code = StatusCode::NOT_FOUND, description = "Profile not found"),
        (status_code = StatusCode::CONFLICT, description = "Identifier already in use"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locator: PathParam<String>,
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileLocationResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let locator = locator.into_locator()?;

    let (secret, update) = json
        .into_inner()
        .into_parts()
        .map_err(|error| into_status_error(error.into()))?;

    let location = state
        .app
        .profiles
        .update_profile(&locator, &secret, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(location.into()))
}
