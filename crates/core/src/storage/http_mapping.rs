//! HTTP status codes for repository failures.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// `NotFound` becomes 404; every other failure is a 500.
///
/// ```
/// use employees_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// assert_eq!(repository_error_to_status_code(&RepositoryError::employee_not_found(1)), 404);
/// assert_eq!(
///     repository_error_to_status_code(&RepositoryError::QueryFailed("boom".into())),
///     500
/// );
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. }
        | RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
