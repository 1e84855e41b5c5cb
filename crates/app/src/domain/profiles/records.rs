//! Profile Records

use jiff::Timestamp;

use crate::{
    domain::profiles::{data::ProfileContent, slugs::Slug},
    uuids::TypedUuid,
};

/// Profile UUID
pub type ProfileUuid = TypedUuid<ProfileRecord>;

/// Profile Record
///
/// A stored profile as handed to callers. The owner secret never leaves the
/// repository, so it has no field here.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub uuid: ProfileUuid,
    pub slug: Slug,
    pub content: ProfileContent,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Where a profile lives after it was created or updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLocation {
    pub uuid: ProfileUuid,
    pub slug: Slug,
}

impl ProfileLocation {
    #[must_use]
    pub fn public_path(&self) -> String {
        self.slug.public_path()
    }
}

impl From<&ProfileRecord> for ProfileLocation {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            uuid: record.uuid,
            slug: record.slug.clone(),
        }
    }
}

/// Either identifier of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLocator {
    Uuid(ProfileUuid),
    Slug(Slug),
}

impl ProfileLocator {
    /// Interpret a path segment as a profile UUID, falling back to a slug.
    ///
    /// Returns `None` when the value is neither. A UUID never parses as a slug
    /// (it is longer than any slug), so the two forms cannot be confused.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(uuid) = value.parse::<ProfileUuid>() {
            return Some(Self::Uuid(uuid));
        }

        Slug::parse(value).ok().map(Self::Slug)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn locator_parses_uuid() -> TestResult {
        let uuid = ProfileUuid::new();

        assert_eq!(
            ProfileLocator::parse(&uuid.to_string()),
            Some(ProfileLocator::Uuid(uuid))
        );

        Ok(())
    }

    #[test]
    fn locator_parses_slug() -> TestResult {
        assert_eq!(
            ProfileLocator::parse("joao-d-avila"),
            Some(ProfileLocator::Slug(Slug::parse("joao-d-avila")?))
        );

        Ok(())
    }

    #[test]
    fn locator_rejects_garbage() {
        assert_eq!(ProfileLocator::parse("Not A Slug"), None);
        assert_eq!(ProfileLocator::parse("x"), None);
    }

    #[test]
    fn public_path_is_rooted_slug() -> TestResult {
        let location = ProfileLocation {
            uuid: ProfileUuid::new(),
            slug: Slug::parse("maria-pet")?,
        };

        assert_eq!(location.public_path(), "/maria-pet");

        Ok(())
    }
}
