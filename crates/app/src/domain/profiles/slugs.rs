//! Profile slugs: derivation, validation and allocation.
//!
//! A slug is the public, URL-safe identifier of a profile (`/{slug}`). It is
//! derived from the display name unless the owner asks for a specific one,
//! and must be unique across all profiles.
//!
//! Allocation is split into a pure part ([`derive_slug`], [`Slug::parse`],
//! [`Slug::with_suffix`]) and a probing part ([`allocate_slug`],
//! [`reassign_slug`]) that asks a [`SlugLookup`] which slugs are held.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::debug;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::domain::profiles::{errors::ProfilesServiceError, records::ProfileUuid};

/// Shortest accepted slug.
pub const MIN_SLUG_LENGTH: usize = 3;

/// Longest accepted slug.
pub const MAX_SLUG_LENGTH: usize = 30;

/// Highest numeric suffix tried before allocation gives up.
pub const MAX_SLUG_SUFFIX: u32 = 1_000;

/// Slug validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("identifier must be between {MIN_SLUG_LENGTH} and {MAX_SLUG_LENGTH} characters, got {0}")]
    Length(usize),

    #[error("identifier may only contain lowercase letters, digits and hyphens")]
    Characters,
}

/// A validated slug matching `^[a-z0-9-]{3,30}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validate a caller-supplied identifier as-is.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] when the identifier has the wrong length or
    /// contains characters outside `[a-z0-9-]`.
    pub fn parse(candidate: &str) -> Result<Self, SlugError> {
        if !candidate
            .bytes()
            .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-')
        {
            return Err(SlugError::Characters);
        }

        let length = candidate.len();

        if !(MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&length) {
            return Err(SlugError::Length(length));
        }

        Ok(Self(candidate.to_owned()))
    }

    /// Derive a slug from a display name and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Length`] when the derived identifier is shorter
    /// than [`MIN_SLUG_LENGTH`] (for example a name with no latin letters or
    /// digits) or longer than [`MAX_SLUG_LENGTH`].
    pub fn derive(display_name: &str) -> Result<Self, SlugError> {
        Self::parse(&derive_slug(display_name))
    }

    /// The slug with `-{suffix}` appended.
    ///
    /// The base is shortened when needed so the result still fits in
    /// [`MAX_SLUG_LENGTH`].
    #[must_use]
    pub fn with_suffix(&self, suffix: u32) -> Self {
        let suffix = format!("-{suffix}");
        let room = MAX_SLUG_LENGTH.saturating_sub(suffix.len());

        let truncated: String = self.0.chars().take(room).collect();
        let trimmed = truncated.trim_end_matches('-');
        let base = if trimmed.is_empty() {
            truncated.as_str()
        } else {
            trimmed
        };

        Self(format!("{base}{suffix}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public path of the profile page for this slug.
    #[must_use]
    pub fn public_path(&self) -> String {
        format!("/{}", self.0)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turn a free-text name into slug form.
///
/// Lowercases, strips diacritics, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends. The result is
/// not length-checked; use [`Slug::derive`] for a validated slug.
#[must_use]
pub fn derive_slug(display_name: &str) -> String {
    let mut slug = String::with_capacity(display_name.len());
    let mut pending_hyphen = false;

    let folded = display_name
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>();

    for ch in folded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }

            slug.push(ch);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Read access to the slug index of the profile store.
#[automock]
#[async_trait]
pub trait SlugLookup: Send {
    /// Returns the profile currently holding `slug`, if any.
    async fn slug_owner(&mut self, slug: &Slug) -> Result<Option<ProfileUuid>, sqlx::Error>;
}

/// Find a free slug for a new profile.
///
/// The candidate is returned unchanged when free. Otherwise `-1`, `-2`, ...
/// are appended until a free slug is found, up to [`MAX_SLUG_SUFFIX`].
///
/// The result is only free at the moment of the check; callers must insert
/// with a uniqueness guard and retry on conflict.
///
/// # Errors
///
/// Returns [`ProfilesServiceError::IdentifierSpaceExhausted`] when every
/// suffix up to the cap is taken, or a storage error from the lookup.
pub async fn allocate_slug<L>(lookup: &mut L, candidate: Slug) -> Result<Slug, ProfilesServiceError>
where
    L: SlugLookup + ?Sized,
{
    if lookup.slug_owner(&candidate).await?.is_none() {
        return Ok(candidate);
    }

    for suffix in 1..=MAX_SLUG_SUFFIX {
        let next = candidate.with_suffix(suffix);

        if lookup.slug_owner(&next).await?.is_none() {
            debug!(base = %candidate, slug = %next, suffix, "allocated suffixed slug");

            return Ok(next);
        }
    }

    Err(ProfilesServiceError::IdentifierSpaceExhausted)
}

/// Validate a slug change requested while editing `profile`.
///
/// Asking for the current slug is a no-op and does not touch the store. A
/// different slug must be valid and not held by another profile; no suffix is
/// added on edit.
///
/// # Errors
///
/// Returns [`ProfilesServiceError::InvalidIdentifier`] for a malformed slug,
/// [`ProfilesServiceError::IdentifierInUse`] when another profile holds it,
/// or a storage error from the lookup.
pub async fn reassign_slug<L>(
    lookup: &mut L,
    profile: ProfileUuid,
    current: &Slug,
    requested: &str,
) -> Result<Slug, ProfilesServiceError>
where
    L: SlugLookup + ?Sized,
{
    if requested == current.as_str() {
        return Ok(current.clone());
    }

    let requested = Slug::parse(requested)?;

    match lookup.slug_owner(&requested).await? {
        Some(owner) if owner != profile => Err(ProfilesServiceError::IdentifierInUse),
        Some(_) | None => Ok(requested),
    }
}
