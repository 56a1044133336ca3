//! Port for the external user directory.

use async_trait::async_trait;

use crate::domain::{DirectoryUser, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserDirectoryError {
        /// The directory could not be reached.
        Connection { message: String } as connection =>
            "user directory connection failed: {message}",
        /// A lookup failed during execution.
        Query { message: String } as query =>
            "user directory query failed: {message}",
    }
}

/// Read-only access to known users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve one user.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<DirectoryUser>, UserDirectoryError>;

    /// Resolve many users at once. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<DirectoryUser>, UserDirectoryError>;

    /// Number of known users.
    async fn count(&self) -> Result<u64, UserDirectoryError>;

    /// Every known user, sorted by name.
    async fn list(&self) -> Result<Vec<DirectoryUser>, UserDirectoryError>;
}

/// Fixture directory that knows nobody.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<DirectoryUser>, UserDirectoryError> {
        Ok(None)
    }

    async fn find_by_ids(
        &self,
        _ids: &[UserId],
    ) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, UserDirectoryError> {
        Ok(0)
    }

    async fn list(&self) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        Ok(Vec::new())
    }
}
