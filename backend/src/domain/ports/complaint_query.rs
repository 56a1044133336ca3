//! Driving port for complaint reads.

use async_trait::async_trait;

use crate::domain::{ComplaintFilter, ComplaintId, ComplaintView, Error};

/// Complaint lookups joined with owner identity.
///
/// Ownership checks belong to the caller; this port answers for any record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintQuery: Send + Sync {
    /// One complaint, or `NotFound`.
    async fn get_complaint(&self, complaint_id: ComplaintId) -> Result<ComplaintView, Error>;

    /// Complaints matching `filter`, newest first.
    async fn list_complaints(&self, filter: ComplaintFilter) -> Result<Vec<ComplaintView>, Error>;
}

/// Fixture query over an empty corpus.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintQuery;

#[async_trait]
impl ComplaintQuery for FixtureComplaintQuery {
    async fn get_complaint(&self, complaint_id: ComplaintId) -> Result<ComplaintView, Error> {
        Err(Error::not_found(format!("complaint {complaint_id} not found")))
    }

    async fn list_complaints(
        &self,
        _filter: ComplaintFilter,
    ) -> Result<Vec<ComplaintView>, Error> {
        Ok(Vec::new())
    }
}
