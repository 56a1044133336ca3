//! Diesel and pool failure translation shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use super::pool::PoolError;

/// Port error constructors a repository supplies for the shared mapping.
pub(crate) trait StoreErrorKinds: Sized {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
}

impl StoreErrorKinds for crate::domain::ports::ComplaintRepositoryError {
    fn connection(message: String) -> Self {
        Self::connection(message)
    }

    fn query(message: String) -> Self {
        Self::query(message)
    }
}

impl StoreErrorKinds for crate::domain::ports::UserDirectoryError {
    fn connection(message: String) -> Self {
        Self::connection(message)
    }

    fn query(message: String) -> Self {
        Self::query(message)
    }
}

/// Pool failures are always connection failures.
pub(crate) fn map_pool_error<E: StoreErrorKinds>(error: PoolError) -> E {
    warn!(error = %error, "database pool unavailable");
    E::connection(error.message().to_owned())
}

/// Closed connections become connection failures; everything else is a
/// query failure. Raw database messages are logged, not propagated.
pub(crate) fn map_diesel_error<E: StoreErrorKinds>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection("database connection closed".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            E::query("duplicate record".to_owned())
        }
        DieselError::NotFound => E::query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query("database query error".to_owned()),
        _ => E::query("database error".to_owned()),
    }
}
