//! Driving port for admin mutations of a single complaint.

use async_trait::async_trait;

use crate::domain::{ComplaintId, ComplaintStatus, ComplaintView, Department, Error, UserId};

/// Request to route a complaint to a department and optionally a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignComplaintRequest {
    pub complaint_id: ComplaintId,
    pub department: Department,
    /// Directory user whose name is snapshotted onto the assignment.
    pub staff_id: Option<UserId>,
}

/// Admin lifecycle operations.
///
/// Each call touches exactly one record and either applies fully or not at
/// all. Unknown complaint ids fail with `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintLifecycle: Send + Sync {
    /// Assign department and optional staff; Pending advances to In-Progress.
    async fn assign(&self, request: AssignComplaintRequest) -> Result<ComplaintView, Error>;

    /// Overwrite the status with any of the four values.
    async fn update_status(
        &self,
        complaint_id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<ComplaintView, Error>;

    /// Overwrite the admin response; status is left alone.
    async fn respond(
        &self,
        complaint_id: ComplaintId,
        response: String,
    ) -> Result<ComplaintView, Error>;

    /// Remove the complaint permanently.
    async fn delete(&self, complaint_id: ComplaintId) -> Result<(), Error>;
}

/// Fixture lifecycle for handlers that never reach it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintLifecycle;

fn missing(id: ComplaintId) -> Error {
    Error::not_found(format!("complaint {id} not found"))
}

#[async_trait]
impl ComplaintLifecycle for FixtureComplaintLifecycle {
    async fn assign(&self, request: AssignComplaintRequest) -> Result<ComplaintView, Error> {
        Err(missing(request.complaint_id))
    }

    async fn update_status(
        &self,
        complaint_id: ComplaintId,
        _status: ComplaintStatus,
    ) -> Result<ComplaintView, Error> {
        Err(missing(complaint_id))
    }

    async fn respond(
        &self,
        complaint_id: ComplaintId,
        _response: String,
    ) -> Result<ComplaintView, Error> {
        Err(missing(complaint_id))
    }

    async fn delete(&self, complaint_id: ComplaintId) -> Result<(), Error> {
        Err(missing(complaint_id))
    }
}
