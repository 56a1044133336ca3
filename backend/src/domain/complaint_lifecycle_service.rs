//! Admin lifecycle service: assignment, status changes, responses and
//! deletion.
//!
//! Every operation follows the same read, apply, compare-and-swap cycle so
//! the domain rules in [`Complaint`] always run against the latest stored
//! record. A concurrent writer that bumps the revision in between causes a
//! bounded number of re-reads before the call gives up with `Conflict`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::complaint_service_support::{
    complaint_not_found, join_owner, map_directory_error, map_repository_error,
};
use crate::domain::ports::{
    AssignComplaintRequest, ComplaintLifecycle, ComplaintRepository, ComplaintRepositoryError,
    UserDirectory,
};
use crate::domain::{
    Complaint, ComplaintId, ComplaintStatus, ComplaintValidationError, ComplaintView, Error,
    UserId,
};

/// Write attempts per operation before reporting `Conflict`.
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

fn validation_error(error: &ComplaintValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({ "field": error.field() }))
}

/// Lifecycle service implementing [`ComplaintLifecycle`].
#[derive(Clone)]
pub struct ComplaintLifecycleService<R, U> {
    complaints: Arc<R>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<R, U> ComplaintLifecycleService<R, U> {
    pub fn new(complaints: Arc<R>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            complaints,
            users,
            clock,
        }
    }
}

impl<R, U> ComplaintLifecycleService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn load(&self, id: ComplaintId) -> Result<Complaint, Error> {
        self.complaints
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| complaint_not_found(id))
    }

    async fn staff_name(&self, staff_id: Option<UserId>) -> Result<Option<String>, Error> {
        let Some(staff_id) = staff_id else {
            return Ok(None);
        };
        let user = self
            .users
            .find_by_id(&staff_id)
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| {
                Error::not_found("user not found").with_details(json!({ "staffId": staff_id }))
            })?;
        Ok(Some(user.name))
    }

    /// Apply `rule` to `current` and store it, re-reading on revision races.
    async fn mutate<F>(&self, mut current: Complaint, mut rule: F) -> Result<Complaint, Error>
    where
        F: FnMut(&mut Complaint, DateTime<Utc>) -> Result<(), Error> + Send,
    {
        let id = current.id();
        let mut attempt = 1;
        loop {
            let expected = current.revision();
            rule(&mut current, self.clock.utc())?;
            match self.complaints.update(&current, expected).await {
                Ok(()) => return Ok(current),
                Err(ComplaintRepositoryError::RevisionMismatch { actual, .. })
                    if attempt < MAX_WRITE_ATTEMPTS =>
                {
                    debug!(
                        complaint_id = %id,
                        attempt,
                        expected,
                        actual,
                        "stale revision, re-reading"
                    );
                    attempt += 1;
                    current = self.load(id).await?;
                }
                Err(ComplaintRepositoryError::RevisionMismatch { actual, .. }) => {
                    warn!(
                        complaint_id = %id,
                        expected,
                        actual,
                        "giving up after concurrent writes"
                    );
                    return Err(Error::conflict(format!(
                        "complaint {id} kept changing concurrently; retry the request"
                    )));
                }
                Err(err) => return Err(map_repository_error(err)),
            }
        }
    }
}

#[async_trait]
impl<R, U> ComplaintLifecycle for ComplaintLifecycleService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn assign(&self, request: AssignComplaintRequest) -> Result<ComplaintView, Error> {
        let AssignComplaintRequest {
            complaint_id,
            department,
            staff_id,
        } = request;
        let current = self.load(complaint_id).await?;
        let staff_name = self.staff_name(staff_id).await?;

        let updated = self
            .mutate(current, |complaint, now| {
                complaint.assign(department, staff_name.clone(), now);
                Ok(())
            })
            .await?;
        info!(
            complaint_id = %complaint_id,
            department = %department,
            status = %updated.status(),
            "complaint assigned"
        );
        join_owner(self.users.as_ref(), &updated).await
    }

    async fn update_status(
        &self,
        complaint_id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<ComplaintView, Error> {
        let current = self.load(complaint_id).await?;
        let previous = current.status();
        let updated = self
            .mutate(current, |complaint, now| {
                complaint.set_status(status, now);
                Ok(())
            })
            .await?;
        info!(
            complaint_id = %complaint_id,
            from = %previous,
            to = %status,
            "complaint status updated"
        );
        join_owner(self.users.as_ref(), &updated).await
    }

    async fn respond(
        &self,
        complaint_id: ComplaintId,
        response: String,
    ) -> Result<ComplaintView, Error> {
        if response.trim().is_empty() {
            return Err(validation_error(&ComplaintValidationError::EmptyResponse));
        }
        let current = self.load(complaint_id).await?;
        let updated = self
            .mutate(current, |complaint, now| {
                complaint
                    .respond(&response, now)
                    .map_err(|err| validation_error(&err))
            })
            .await?;
        info!(complaint_id = %complaint_id, "admin response recorded");
        join_owner(self.users.as_ref(), &updated).await
    }

    async fn delete(&self, complaint_id: ComplaintId) -> Result<(), Error> {
        self.complaints
            .delete(&complaint_id)
            .await
            .map_err(map_repository_error)?;
        info!(complaint_id = %complaint_id, "complaint deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "complaint_lifecycle_service_tests.rs"]
mod tests;
