//! Directory listing behind the [`UsersQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::complaint_service_support::map_directory_error;
use crate::domain::ports::{UserDirectory, UsersQuery};
use crate::domain::{DirectoryUser, Error};

#[derive(Clone)]
pub struct UsersQueryService<U> {
    users: Arc<U>,
}

impl<U> UsersQueryService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UsersQuery for UsersQueryService<U>
where
    U: UserDirectory,
{
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, Error> {
        let users = self.users.list().await.map_err(map_directory_error)?;
        debug!(count = users.len(), "directory users listed");
        Ok(users)
    }
}
