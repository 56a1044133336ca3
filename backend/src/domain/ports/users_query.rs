//! Driving port for the admin staff picker.
//!
//! Handlers list directory users through this port instead of reaching the
//! driven [`UserDirectory`](super::UserDirectory) themselves.

use async_trait::async_trait;

use crate::domain::{DirectoryUser, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every directory user, sorted by name.
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, Error>;
}

/// Fixture query over an empty directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, Error> {
        Ok(Vec::new())
    }
}
