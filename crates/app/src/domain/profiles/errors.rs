//! Profiles service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::profiles::{slugs::SlugError, validation::FieldError};

/// Name of the unique constraint on `profiles.slug`.
const SLUG_UNIQUE_CONSTRAINT: &str = "profiles_slug_key";

/// Name of the format check on `profiles.slug`.
const SLUG_FORMAT_CONSTRAINT: &str = "profiles_slug_format";

#[derive(Debug, Error)]
pub enum ProfilesServiceError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] SlugError),

    #[error("identifier is already in use")]
    IdentifierInUse,

    #[error("no free identifier left for this name")]
    IdentifierSpaceExhausted,

    #[error("invalid field: {0}")]
    InvalidField(#[from] FieldError),

    #[error("profile not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProfilesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        let kind = database_error.kind();
        let constraint = database_error.constraint().map(ToOwned::to_owned);

        match kind {
            ErrorKind::UniqueViolation if constraint.as_deref() == Some(SLUG_UNIQUE_CONSTRAINT) => {
                Self::IdentifierInUse
            }
            ErrorKind::CheckViolation if constraint.as_deref() == Some(SLUG_FORMAT_CONSTRAINT) => {
                Self::InvalidIdentifier(SlugError::Characters)
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_found() {
        let error = ProfilesServiceError::from(Error::RowNotFound);

        assert!(matches!(error, ProfilesServiceError::NotFound), "got {error:?}");
    }

    #[test]
    fn pool_errors_are_storage_failures() {
        let error = ProfilesServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, ProfilesServiceError::Sql(_)), "got {error:?}");
    }
}
