//! In-memory `UserDirectory`.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{DirectoryUser, UserId};

/// Directory seeded at construction and extendable via [`Self::upsert`].
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<BTreeMap<UserId, DirectoryUser>>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = DirectoryUser>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Insert or replace a user.
    pub fn upsert(&self, user: DirectoryUser) -> Result<(), UserDirectoryError> {
        self.users
            .write()
            .map_err(|_| UserDirectoryError::connection("user directory lock poisoned"))?
            .insert(user.id, user);
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        Ok(self
            .users
            .read()
            .map_err(|_| UserDirectoryError::connection("user directory lock poisoned"))?
            .values()
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<DirectoryUser>, UserDirectoryError> {
        Ok(self.snapshot()?.into_iter().find(|u| &u.id == id))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|u| ids.contains(&u.id))
            .collect())
    }

    async fn count(&self) -> Result<u64, UserDirectoryError> {
        Ok(u64::try_from(self.snapshot()?.len()).unwrap_or(u64::MAX))
    }

    async fn list(&self) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        let mut users = self.snapshot()?;
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }
}
