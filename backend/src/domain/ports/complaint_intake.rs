//! Driving port for filing complaints.

use async_trait::async_trait;

use crate::domain::{ComplaintDraft, ComplaintView, Error};

/// User-facing intake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintIntake: Send + Sync {
    /// Validate and store a new Pending complaint owned by `draft.user`.
    async fn file_complaint(&self, draft: ComplaintDraft) -> Result<ComplaintView, Error>;
}

/// Fixture intake that refuses every filing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintIntake;

#[async_trait]
impl ComplaintIntake for FixtureComplaintIntake {
    async fn file_complaint(&self, _draft: ComplaintDraft) -> Result<ComplaintView, Error> {
        Err(Error::service_unavailable("complaint intake is not configured"))
    }
}
