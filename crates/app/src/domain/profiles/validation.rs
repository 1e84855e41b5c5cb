//! Field checks for submitted profile content.

use thiserror::Error;

use crate::domain::profiles::{
    data::{OpeningHours, ProfileContent, ServiceOffering},
    ownership::OwnerSecret,
};

/// Minimum number of characters in a phone number, separators included.
pub const MIN_PHONE_LENGTH: usize = 10;

/// A submitted field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Trim and check submitted content.
///
/// Optional fields that are blank after trimming become `None`, and a leading
/// `@` is dropped from the social handle.
///
/// # Errors
///
/// Returns the first [`FieldError`] found.
pub fn sanitize_content(content: ProfileContent) -> Result<ProfileContent, FieldError> {
    let display_name = required("display_name", &content.display_name)?;
    let address = required("address", &content.address)?;
    let phone = required("phone", &content.phone)?;

    if !phone
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '(' | ')' | '-' | '+'))
    {
        return Err(FieldError::new("phone", "may only contain digits, spaces and ()-+"));
    }

    if phone.chars().count() < MIN_PHONE_LENGTH {
        return Err(FieldError::new("phone", "must have at least 10 characters"));
    }

    let social_handle = optional(content.social_handle.as_deref())
        .map(|handle| handle.trim_start_matches('@').to_owned())
        .filter(|handle| !handle.is_empty());

    if social_handle.as_deref().is_some_and(|handle| {
        !handle
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '_')
    }) {
        return Err(FieldError::new(
            "social_handle",
            "may only contain letters, digits, dots and underscores",
        ));
    }

    let hours = content
        .hours
        .into_iter()
        .map(sanitize_hours)
        .collect::<Result<Vec<_>, _>>()?;

    let services = content
        .services
        .into_iter()
        .map(|service| {
            if service
                .price
                .is_some_and(|price| !price.is_finite() || price < 0.0)
            {
                return Err(FieldError::new("services.price", "must be a non-negative number"));
            }

            Ok(ServiceOffering {
                name: required("services.name", &service.name)?,
                price: service.price,
            })
        })
        .collect::<Result<Vec<_>, FieldError>>()?;

    Ok(ProfileContent {
        display_name,
        business_name: optional(content.business_name.as_deref()),
        phone,
        social_handle,
        address,
        photo_ref: optional(content.photo_ref.as_deref()),
        hours,
        services,
    })
}

/// Check that an owner secret looks like an email address.
///
/// The secret is kept exactly as given, so surrounding whitespace is an
/// error rather than something to strip.
///
/// # Errors
///
/// Returns a [`FieldError`] for `owner_secret` when blank, padded with
/// whitespace or not email shaped.
pub fn validate_owner_secret(secret: &str) -> Result<OwnerSecret, FieldError> {
    required("owner_secret", secret)?;

    if secret.trim() != secret {
        return Err(FieldError::new(
            "owner_secret",
            "must not start or end with whitespace",
        ));
    }

    if is_email_shaped(secret) {
        Ok(OwnerSecret::new(secret))
    } else {
        Err(FieldError::new("owner_secret", "must be an email address"))
    }
}

fn sanitize_hours(hours: OpeningHours) -> Result<OpeningHours, FieldError> {
    let day_label = required("hours.day_label", &hours.day_label)?;
    let opens_at = hours.opens_at.trim();
    let closes_at = hours.closes_at.trim();

    if !is_clock_time(opens_at) {
        return Err(FieldError::new("hours.opens_at", "must be HH:MM"));
    }

    if !is_clock_time(closes_at) {
        return Err(FieldError::new("hours.closes_at", "must be HH:MM"));
    }

    Ok(OpeningHours {
        day_label,
        opens_at: opens_at.to_owned(),
        closes_at: closes_at.to_owned(),
        closed: hours.closed,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();

    if value.is_empty() {
        Err(FieldError::new(field, "is required"))
    } else {
        Ok(value.to_owned())
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

fn is_clock_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };

    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());

    two_digits(hours)
        && two_digits(minutes)
        && hours.parse::<u8>().is_ok_and(|h| h < 24)
        && minutes.parse::<u8>().is_ok_and(|m| m < 60)
}
