//! Profiles service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::profiles::{
        data::{NewProfile, ProfileContent, ProfileUpdate},
        errors::ProfilesServiceError,
        ownership::{OwnerSecret, OwnerSecretDigest},
        records::{ProfileLocation, ProfileLocator, ProfileRecord, ProfileUuid},
        repository::{PgProfilesRepository, ProfileInsert},
        slugs::{Slug, allocate_slug, reassign_slug},
        validation::sanitize_content,
    },
};

/// How often creation re-allocates a slug after losing an insert race.
pub const MAX_INSERT_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct PgProfilesService {
    db: Db,
    repository: PgProfilesRepository,
}

impl PgProfilesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProfilesRepository::new(),
        }
    }
}

#[async_trait]
impl ProfilesService for PgProfilesService {
    async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileLocation, ProfilesServiceError> {
        let content = sanitize_content(profile.content)?;

        let candidate = match profile.requested_slug.as_deref().map(str::trim) {
            Some(requested) if !requested.is_empty() => Slug::parse(requested)?,
            _ => Slug::derive(&content.display_name)?,
        };

        let digest = profile.owner_secret.digest();
        let uuid = ProfileUuid::new();

        let mut tx = self.db.begin().await?;

        let record = insert_with_free_slug(&mut tx, &candidate, uuid, &digest, &content).await?;

        tx.commit().await?;

        info!(profile = %record.uuid, slug = %record.slug, "created profile");

        Ok(ProfileLocation::from(&record))
    }

    async fn get_public_profile(&self, slug: &Slug) -> Result<ProfileRecord, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.find_by_slug(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn get_profile_for_edit(
        &self,
        locator: &ProfileLocator,
        secret: &OwnerSecret,
    ) -> Result<ProfileRecord, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .find_owned(&mut tx, locator, &secret.digest())
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn update_profile(
        &self,
        locator: &ProfileLocator,
        secret: &OwnerSecret,
        update: ProfileUpdate,
    ) -> Result<ProfileLocation, ProfilesServiceError> {
        let content = sanitize_content(update.content)?;

        let mut tx = self.db.begin().await?;

        let current = self
            .repository
            .find_owned(&mut tx, locator, &secret.digest())
            .await?;

        let slug = match update.slug.as_deref().map(str::trim) {
            Some(requested) if !requested.is_empty() => {
                reassign_slug(&mut tx, current.uuid, &current.slug, requested).await?
            }
            _ => current.slug.clone(),
        };

        let digest = update.new_owner_secret.as_ref().map(OwnerSecret::digest);

        let updated = self
            .repository
            .update_profile(&mut tx, current.uuid, &slug, digest.as_ref(), &content)
            .await?;

        tx.commit().await?;

        if updated.slug != current.slug {
            info!(profile = %updated.uuid, from = %current.slug, to = %updated.slug, "moved profile");
        }

        Ok(ProfileLocation::from(&updated))
    }
}

/// Allocate a slug from `candidate` and insert the profile under it.
///
/// A slug taken by a concurrent writer between the check and the insert is
/// allocated again, at most [`MAX_INSERT_ATTEMPTS`] times.
async fn insert_with_free_slug<W>(
    writer: &mut W,
    candidate: &Slug,
    uuid: ProfileUuid,
    digest: &OwnerSecretDigest,
    content: &ProfileContent,
) -> Result<ProfileRecord, ProfilesServiceError>
where
    W: ProfileInsert + ?Sized,
{
    for attempt in 1..=MAX_INSERT_ATTEMPTS {
        let slug = allocate_slug(writer, candidate.clone()).await?;

        if let Some(record) = writer
            .insert_if_slug_free(uuid, &slug, digest, content)
            .await?
        {
            return Ok(record);
        }

        warn!(%slug, attempt, "slug taken concurrently, allocating again");
    }

    Err(ProfilesServiceError::IdentifierInUse)
}

#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// Creates a profile, allocating a unique slug for it.
    async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileLocation, ProfilesServiceError>;

    /// Retrieve a profile for its public page.
    async fn get_public_profile(&self, slug: &Slug) -> Result<ProfileRecord, ProfilesServiceError>;

    /// Retrieve a profile for editing. Unknown profiles and wrong secrets are
    /// both reported as [`ProfilesServiceError::NotFound`].
    async fn get_profile_for_edit(
        &self,
        locator: &ProfileLocator,
        secret: &OwnerSecret,
    ) -> Result<ProfileRecord, ProfilesServiceError>;

    /// Replaces a profile's content, optionally moving it to a new slug.
    async fn update_profile(
        &self,
        locator: &ProfileLocator,
        secret: &OwnerSecret,
        update: ProfileUpdate,
    ) -> Result<ProfileLocation, ProfilesServiceError>;
}
