//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use groomerlink_app::{
    context::AppContext,
    domain::{
        photos::{DEFAULT_MAX_PHOTO_BYTES, MockPhotosService},
        profiles::{
            MockProfilesService,
            data::{ProfileContent, ServiceOffering},
            records::{ProfileRecord, ProfileUuid},
            slugs::{Slug, SlugError},
        },
    },
};

use crate::state::State;

fn strict_profiles_mock() -> MockProfilesService {
    let mut profiles = MockProfilesService::new();

    profiles.expect_create_profile().never();
    profiles.expect_get_public_profile().never();
    profiles.expect_get_profile_for_edit().never();
    profiles.expect_update_profile().never();

    profiles
}

fn strict_photos_mock() -> MockPhotosService {
    let mut photos = MockPhotosService::new();

    photos.expect_store_photo().never();

    photos
}

pub(crate) fn state_with(
    profiles: MockProfilesService,
    photos: MockPhotosService,
    upload_max_bytes: u64,
) -> Arc<State> {
    State::shared(
        AppContext::new(Arc::new(profiles), Arc::new(photos)),
        upload_max_bytes,
    )
}

pub(crate) fn profiles_service(profiles: MockProfilesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(
                profiles,
                strict_photos_mock(),
                DEFAULT_MAX_PHOTO_BYTES,
            )))
            .push(route),
    )
}

pub(crate) fn photos_service(photos: MockPhotosService, max_bytes: u64, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_profiles_mock(), photos, max_bytes)))
            .push(route),
    )
}

/// A stored profile as the service would return it.
pub(crate) fn make_record(slug: &str) -> Result<ProfileRecord, SlugError> {
    Ok(ProfileRecord {
        uuid: ProfileUuid::new(),
        slug: Slug::parse(slug)?,
        content: ProfileContent {
            display_name: "Maria Pet".to_owned(),
            business_name: Some("Maria Banho e Tosa".to_owned()),
            phone: "(11) 98765-4321".to_owned(),
            social_handle: Some("maria.pet".to_owned()),
            address: "Rua A, 1".to_owned(),
            photo_ref: None,
            hours: Vec::new(),
            services: vec![ServiceOffering {
                name: "Banho".to_owned(),
                price: Some(45.0),
            }],
        },
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    })
}
