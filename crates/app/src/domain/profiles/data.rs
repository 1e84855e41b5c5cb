//! Profile input data.

use serde::{Deserialize, Serialize};

use crate::domain::profiles::ownership::OwnerSecret;

/// Public card content shared by creation, update and reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileContent {
    pub display_name: String,
    pub business_name: Option<String>,
    pub phone: String,
    pub social_handle: Option<String>,
    pub address: String,
    pub photo_ref: Option<String>,
    pub hours: Vec<OpeningHours>,
    pub services: Vec<ServiceOffering>,
}

/// One row of the opening-hours table. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day_label: String,
    pub opens_at: String,
    pub closes_at: String,
    #[serde(default)]
    pub closed: bool,
}

/// One entry of the price list. `price` is in reais and may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// New Profile
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub content: ProfileContent,
    pub owner_secret: OwnerSecret,

    /// Identifier asked for by the owner; derived from the display name when absent.
    pub requested_slug: Option<String>,
}

/// Profile Update
///
/// Replaces the whole content. `slug` and `new_owner_secret` keep their
/// current values when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub content: ProfileContent,
    pub slug: Option<String>,
    pub new_owner_secret: Option<OwnerSecret>,
}
