//! Profiles Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar, types::Json,
};
use uuid::Uuid;

use crate::domain::profiles::{
    data::{OpeningHours, ProfileContent, ServiceOffering},
    ownership::OwnerSecretDigest,
    records::{ProfileLocator, ProfileRecord, ProfileUuid},
    slugs::{Slug, SlugLookup},
};

const FIND_PROFILE_BY_SLUG_SQL: &str = include_str!("sql/find_profile_by_slug.sql");
const FIND_OWNED_PROFILE_BY_UUID_SQL: &str = include_str!("sql/find_owned_profile_by_uuid.sql");
const FIND_OWNED_PROFILE_BY_SLUG_SQL: &str = include_str!("sql/find_owned_profile_by_slug.sql");
const FIND_SLUG_OWNER_SQL: &str = include_str!("sql/find_slug_owner.sql");
const INSERT_PROFILE_SQL: &str = include_str!("sql/insert_profile.sql");
const UPDATE_PROFILE_SQL: &str = include_str!("sql/update_profile.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProfilesRepository;

impl PgProfilesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &Slug,
    ) -> Result<ProfileRecord, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(FIND_PROFILE_BY_SLUG_SQL)
            .bind(slug.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch a profile only if `digest` matches its stored owner secret.
    ///
    /// A missing profile and a wrong secret both come back as
    /// [`sqlx::Error::RowNotFound`].
    pub(crate) async fn find_owned(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        locator: &ProfileLocator,
        digest: &OwnerSecretDigest,
    ) -> Result<ProfileRecord, sqlx::Error> {
        let query = match locator {
            ProfileLocator::Uuid(uuid) => {
                query_as::<Postgres, ProfileRecord>(FIND_OWNED_PROFILE_BY_UUID_SQL)
                    .bind(uuid.into_uuid())
            }
            ProfileLocator::Slug(slug) => {
                query_as::<Postgres, ProfileRecord>(FIND_OWNED_PROFILE_BY_SLUG_SQL)
                    .bind(slug.as_str())
            }
        };

        query.bind(digest.as_str()).fetch_one(&mut **tx).await
    }

    /// Insert a profile unless its slug is taken.
    ///
    /// Returns `None` when another profile already holds `slug`.
    pub(crate) async fn insert_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProfileUuid,
        slug: &Slug,
        digest: &OwnerSecretDigest,
        content: &ProfileContent,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(INSERT_PROFILE_SQL)
            .bind(uuid.into_uuid())
            .bind(slug.as_str())
            .bind(digest.as_str())
            .bind(&content.display_name)
            .bind(content.business_name.as_deref())
            .bind(&content.phone)
            .bind(content.social_handle.as_deref())
            .bind(&content.address)
            .bind(content.photo_ref.as_deref())
            .bind(Json(&content.hours))
            .bind(Json(&content.services))
            .fetch_optional(&mut **tx)
            .await
    }

    /// Overwrite a profile's content and slug, and its secret when `digest` is set.
    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProfileUuid,
        slug: &Slug,
        digest: Option<&OwnerSecretDigest>,
        content: &ProfileContent,
    ) -> Result<ProfileRecord, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(UPDATE_PROFILE_SQL)
            .bind(uuid.into_uuid())
            .bind(slug.as_str())
            .bind(digest.map(OwnerSecretDigest::as_str))
            .bind(&content.display_name)
            .bind(content.business_name.as_deref())
            .bind(&content.phone)
            .bind(content.social_handle.as_deref())
            .bind(&content.address)
            .bind(content.photo_ref.as_deref())
            .bind(Json(&content.hours))
            .bind(Json(&content.services))
            .fetch_one(&mut **tx)
            .await
    }
}

/// Inserts a new profile row unless its slug is already held.
#[async_trait]
pub(crate) trait ProfileInsert: SlugLookup {
    async fn insert_if_slug_free(
        &mut self,
        uuid: ProfileUuid,
        slug: &Slug,
        digest: &OwnerSecretDigest,
        content: &ProfileContent,
    ) -> Result<Option<ProfileRecord>, sqlx::Error>;
}

#[async_trait]
impl<'c> ProfileInsert for Transaction<'c, Postgres> {
    async fn insert_if_slug_free(
        &mut self,
        uuid: ProfileUuid,
        slug: &Slug,
        digest: &OwnerSecretDigest,
        content: &ProfileContent,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        PgProfilesRepository::new()
            .insert_profile(self, uuid, slug, digest, content)
            .await
    }
}

#[async_trait]
impl<'c> SlugLookup for Transaction<'c, Postgres> {
    async fn slug_owner(&mut self, slug: &Slug) -> Result<Option<ProfileUuid>, sqlx::Error> {
        let owner: Option<Uuid> = query_scalar(FIND_SLUG_OWNER_SQL)
            .bind(slug.as_str())
            .fetch_optional(&mut **self)
            .await?;

        Ok(owner.map(ProfileUuid::from_uuid))
    }
}

impl<'r> FromRow<'r, PgRow> for ProfileRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let slug: String = row.try_get("slug")?;

        let slug = Slug::parse(&slug).map_err(|e| sqlx::Error::ColumnDecode {
            index: "slug".to_string(),
            source: Box::new(e),
        })?;

        let Json(hours) = row.try_get::<Json<Vec<OpeningHours>>, _>("hours")?;
        let Json(services) = row.try_get::<Json<Vec<ServiceOffering>>, _>("services")?;

        Ok(Self {
            uuid: ProfileUuid::from_uuid(row.try_get("uuid")?),
            slug,
            content: ProfileContent {
                display_name: row.try_get("display_name")?,
                business_name: row.try_get("business_name")?,
                phone: row.try_get("phone")?,
                social_handle: row.try_get("social_handle")?,
                address: row.try_get("address")?,
                photo_ref: row.try_get("photo_ref")?,
                hours,
                services,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
