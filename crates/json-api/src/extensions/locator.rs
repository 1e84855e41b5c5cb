//! Profile path parameter parsing.

use salvo::{oapi::extract::PathParam, prelude::StatusError};

use groomerlink_app::domain::profiles::{records::ProfileLocator, slugs::Slug};

fn profile_not_found() -> StatusError {
    StatusError::not_found().brief("Profile not found")
}

/// A path segment that cannot name a profile answers 404, the same as an
/// unknown profile.
pub(crate) trait LocatorExt {
    /// Profile UUID or slug.
    fn into_locator(self) -> Result<ProfileLocator, StatusError>;

    /// Slug only; public pages are never addressed by UUID.
    fn into_slug(self) -> Result<Slug, StatusError>;
}

impl LocatorExt for PathParam<String> {
    fn into_locator(self) -> Result<ProfileLocator, StatusError> {
        ProfileLocator::parse(&self.into_inner()).ok_or_else(profile_not_found)
    }

    fn into_slug(self) -> Result<Slug, StatusError> {
        Slug::parse(&self.into_inner()).map_err(|_ignored| profile_not_found())
    }
}
