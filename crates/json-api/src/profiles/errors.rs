//! Profile Errors

use salvo::http::StatusError;
use tracing::error;

use groomerlink_app::domain::profiles::ProfilesServiceError;

use crate::observability::record_identifier_conflict;

pub(crate) fn into_status_error(error: ProfilesServiceError) -> StatusError {
    match error {
        ProfilesServiceError::InvalidIdentifier(source) => {
            StatusError::bad_request().brief(format!("Invalid identifier: {source}"))
        }
        ProfilesServiceError::InvalidField(source) => {
            StatusError::bad_request().brief(format!("Invalid field: {source}"))
        }
        ProfilesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid profile payload")
        }
        ProfilesServiceError::IdentifierInUse => {
            record_identifier_conflict();

            StatusError::conflict().brief("Identifier is already in use")
        }
        ProfilesServiceError::IdentifierSpaceExhausted => {
            record_identifier_conflict();

            StatusError::conflict()
                .brief("No free identifier left for this name, request one explicitly")
        }
        ProfilesServiceError::NotFound => StatusError::not_found().brief("Profile not found"),
        ProfilesServiceError::Sql(source) => {
            error!("profile storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use groomerlink_app::domain::profiles::{slugs::SlugError, validation::FieldError};

    use super::*;

    #[test]
    fn errors_map_to_statuses() {
        let cases = [
            (
                ProfilesServiceError::InvalidIdentifier(SlugError::Characters),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProfilesServiceError::InvalidField(FieldError {
                    field: "phone",
                    reason: "is required",
                }),
                StatusCode::BAD_REQUEST,
            ),
            (ProfilesServiceError::IdentifierInUse, StatusCode::CONFLICT),
            (ProfilesServiceError::IdentifierSpaceExhausted, StatusCode::CONFLICT),
            (ProfilesServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                ProfilesServiceError::Sql(sqlx_pool_timeout()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let rendered = format!("{error:?}");

            assert_eq!(into_status_error(error).code, expected, "status for {rendered}");
        }
    }

    #[test]
    fn storage_errors_do_not_leak_details() {
        let status = into_status_error(ProfilesServiceError::Sql(sqlx_pool_timeout()));

        assert!(
            !status.brief.contains("pool"),
            "brief should not mention the storage error: {}",
            status.brief
        );
    }

    fn sqlx_pool_timeout() -> sqlx::Error {
        sqlx::Error::PoolTimedOut
    }
}
