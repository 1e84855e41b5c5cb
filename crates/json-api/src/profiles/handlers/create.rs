//! Create Profile Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use groomerlink_app::domain::profiles::{
    data::{NewProfile, ProfileContent},
    validation::{FieldError, validate_owner_secret},
};

use crate::{
    extensions::*,
    observability::record_profile_created,
    profiles::{
        errors::into_status_error,
        models::{OpeningHoursBody, ProfileLocationResponse, ServiceOfferingBody},
    },
};

/// Create Profile Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProfileRequest {
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

    /// Email address that will be required to edit the profile
    pub owner_secret: String,

    /// Slug to use instead of the one derived from `display_name`
    #[serde(default)]
    pub requested_identifier: Option<String>,
}

impl TryFrom<CreateProfileRequest> for NewProfile {
    type Error = FieldError;

    fn try_from(request: CreateProfileRequest) -> Result<Self, Self::Error> {
        Ok(NewProfile {
            owner_secret: validate_owner_secret(&request.owner_secret)?,
            requested_slug: request.requested_identifier,
            content: ProfileContent {
                display_name: request.display_name,
                business_name: request.business_name,
                phone: request.phone,
                social_handle: request.social_handle,
                address: request.address,
                photo_ref: request.photo_ref,
                hours: request.hours.into_iter().map(Into::into).collect(),
                services: request.services.into_iter().map(Into::into).collect(),
            },
        })
    }
}

/// Create Profile Handler
///
/// Creates a profile and allocates its public identifier.
#[endpoint(
    tags("profiles"),
    summary = "Create Profile",
    responses(
        (status_code = StatusCode::CREATED, description = "Profile created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid identifier or field"),
        (status_code = StatusCode::CONFLICT, description = "No free identifier available"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProfileRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProfileLocationResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let profile = NewProfile::try_from(json.into_inner())
        .map_err(|error| into_status_error(error.into()))?;

    let location = state
        .app
        .profiles
        .create_profile(profile)
        .await
        .map_err(into_status_error)?;

    record_profile_created();

    res.add_header(LOCATION, format!("/profiles/{}", location.slug), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(location.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use groomerlink_app::domain::profiles::{
        MockProfilesService, ProfilesServiceError,
        data::{OpeningHours, ServiceOffering},
        ownership::OwnerSecret,
        records::{ProfileLocation, ProfileUuid},
        slugs::{Slug, SlugError},
    };

    use crate::test_helpers::profiles_service;

    use super::*;

    fn make_service(profiles: MockProfilesService) -> Service {
        profiles_service(profiles, Router::with_path("profiles").post(handler))
    }

    fn with_field(mut body: Value, key: &str, value: Value) -> Value {
        if let Some(fields) = body.as_object_mut() {
            fields.insert(key.to_owned(), value);
        }

        body
    }

    fn request_body() -> Value {
        json!({
            "display_name": "João D'Ávila",
            "phone": "(11) 98765-4321",
            "address": "Rua das Flores, 10",
            "social_handle": "@joao.pet",
            "hours": [
                { "day_label": "Segunda", "opens_at": "08:00", "closes_at": "18:00" }
            ],
            "services": [
                { "name": "Banho", "price": 39.9 },
                { "name": "Tosa" }
            ],
            "owner_secret": "joao@example.com"
        })
    }

    #[tokio::test]
    async fn test_create_profile_success() -> TestResult {
        let uuid = ProfileUuid::new();
        let location = ProfileLocation {
            uuid,
            slug: Slug::parse("joao-d-avila")?,
        };

        let mut profiles = MockProfilesService::new();

        profiles
            .expect_create_profile()
            .once()
            .withf(|new| {
                new.owner_secret == OwnerSecret::new("joao@example.com")
                    && new.requested_slug.is_none()
                    && new.content.display_name == "João D'Ávila"
                    && new.content.social_handle.as_deref() == Some("@joao.pet")
                    && new.content.hours
                        == vec![OpeningHours {
                            day_label: "Segunda".to_owned(),
                            opens_at: "08:00".to_owned(),
                            closes_at: "18:00".to_owned(),
                            closed: false,
                        }]
                    && new.content.services
                        == vec![
                            ServiceOffering {
                                name: "Banho".to_owned(),
                                price: Some(39.9),
                            },
                            ServiceOffering {
                                name: "Tosa".to_owned(),
                                price: None,
                            },
                        ]
            })
            .return_once(move |_| Ok(location));

        let mut res = TestClient::post("http://example.com/profiles")
            .json(&request_body())
            .send(&make_service(profiles))
            .await;

        let body: ProfileLocationResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/profiles/joao-d-avila"));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.identifier, "joao-d-avila");
        assert_eq!(body.public_path, "/joao-d-avila");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_profile_forwards_requested_identifier() -> TestResult {
        let uuid = ProfileUuid::new();
        let slug = Slug::parse("joao-pet")?;

        let mut profiles = MockProfilesService::new();

        profiles
            .expect_create_profile()
            .once()
            .withf(|new| new.requested_slug.as_deref() == Some("joao-pet"))
            .return_once(move |_| Ok(ProfileLocation { uuid, slug }));

        let body = with_field(request_body(), "requested_identifier", json!("joao-pet"));

        let res = TestClient::post("http://example.com/profiles")
            .json(&body)
            .send(&make_service(profiles))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_profile_rejects_malformed_owner_secret() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles.expect_create_profile().never();

        let body = with_field(request_body(), "owner_secret", json!("not-an-email"));

        let res = TestClient::post("http://example.com/profiles")
            .json(&body)
            .send(&make_service(profiles))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_profile_invalid_identifier_returns_400() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles
            .expect_create_profile()
            .once()
            .return_once(|_| {
                Err(ProfilesServiceError::InvalidIdentifier(SlugError::Length(2)))
            });

        let res = TestClient::post("http://example.com/profiles")
            .json(&request_body())
            .send(&make_service(profiles))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_profile_exhausted_identifiers_returns_409() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles
            .expect_create_profile()
            .once()
            .return_once(|_| Err(ProfilesServiceError::IdentifierSpaceExhausted));

        let res = TestClient::post("http://example.com/profiles")
            .json(&request_body())
            .send(&make_service(profiles))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_profile_missing_fields_returns_400() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles.expect_create_profile().never();

        let res = TestClient::post("http://example.com/profiles")
            .json(&json!({ "display_name": "Maria" }))
            .send(&make_service(profiles))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
