//! Profile request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use groomerlink_app::domain::profiles::{
    data::{OpeningHours, ProfileContent, ServiceOffering},
    links::{booking_greeting, instagram_url, whatsapp_url},
    records::{ProfileLocation, ProfileRecord},
};

/// One row of a profile's opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct OpeningHoursBody {
    /// Day or range of days, e.g. "Segunda a Sexta"
    pub day_label: String,

    /// Opening time, `HH:MM`
    pub opens_at: String,

    /// Closing time, `HH:MM`
    pub closes_at: String,

    /// Closed all day
    #[serde(default)]
    pub closed: bool,
}

impl From<OpeningHoursBody> for OpeningHours {
    fn from(body: OpeningHoursBody) -> Self {
        OpeningHours {
            day_label: body.day_label,
            opens_at: body.opens_at,
            closes_at: body.closes_at,
            closed: body.closed,
        }
    }
}

impl From<OpeningHours> for OpeningHoursBody {
    fn from(hours: OpeningHours) -> Self {
        OpeningHoursBody {
            day_label: hours.day_label,
            opens_at: hours.opens_at,
            closes_at: hours.closes_at,
            closed: hours.closed,
        }
    }
}

/// One entry of a profile's price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceOfferingBody {
    /// Service name
    pub name: String,

    /// Price in reais; omitted when on request
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<ServiceOfferingBody> for ServiceOffering {
    fn from(body: ServiceOfferingBody) -> Self {
        ServiceOffering {
            name: body.name,
            price: body.price,
        }
    }
}

impl From<ServiceOffering> for ServiceOfferingBody {
    fn from(service: ServiceOffering) -> Self {
        ServiceOfferingBody {
            name: service.name,
            price: service.price,
        }
    }
}

/// Where a profile can be found after a write.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileLocationResponse {
    /// Profile UUID
    pub id: Uuid,

    /// Profile slug
    pub identifier: String,

    /// Path of the public profile page
    pub public_path: String,
}

impl From<ProfileLocation> for ProfileLocationResponse {
    fn from(location: ProfileLocation) -> Self {
        ProfileLocationResponse {
            id: location.uuid.into(),
            public_path: location.public_path(),
            identifier: location.slug.into_string(),
        }
    }
}

/// A profile as shown to visitors and to its owner. Never carries the owner secret.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    /// Profile UUID
    pub id: Uuid,

    /// Profile slug
    pub identifier: String,

    /// Path of the public profile page
    pub public_path: String,

    pub display_name: String,
    pub business_name: Option<String>,
    pub phone: String,
    pub social_handle: Option<String>,
    pub address: String,
    pub photo_ref: Option<String>,
    pub hours: Vec<OpeningHoursBody>,
    pub services: Vec<ServiceOfferingBody>,

    /// Click-to-chat link for the phone number
    pub whatsapp_url: Option<String>,

    /// Link to the social profile
    pub instagram_url: Option<String>,

    /// The date and time the profile was created
    pub created_at: String,

    /// The date and time the profile was last updated
    pub updated_at: String,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(record: ProfileRecord) -> Self {
        let ProfileContent {
            display_name,
            business_name,
            phone,
            social_handle,
            address,
            photo_ref,
            hours,
            services,
        } = record.content;

        ProfileResponse {
            id: record.uuid.into(),
            public_path: record.slug.public_path(),
            identifier: record.slug.into_string(),
            whatsapp_url: whatsapp_url(&phone, &booking_greeting(&display_name)),
            instagram_url: social_handle.as_deref().and_then(instagram_url),
            display_name,
            business_name,
            phone,
            social_handle,
            address,
            photo_ref,
            hours: hours.into_iter().map(Into::into).collect(),
            services: services.into_iter().map(Into::into).collect(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
