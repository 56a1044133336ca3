//! Port for the complaint record store.

use async_trait::async_trait;

use crate::domain::{Complaint, ComplaintFilter, ComplaintId, ComplaintSearch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by complaint repository adapters.
    pub enum ComplaintRepositoryError {
        /// The store could not be reached.
        Connection { message: String } as connection =>
            "complaint repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } as query =>
            "complaint repository query failed: {message}",
        /// The stored revision moved on since the record was read.
        RevisionMismatch { expected: u32, actual: u32 } as revision_mismatch =>
            "complaint revision mismatch: expected {expected}, found {actual}",
        /// The record vanished between read and write.
        Missing { id: ComplaintId } as missing =>
            "complaint {id} no longer exists",
    }
}

/// Durable collection of complaints.
///
/// `update` is a compare-and-swap on `revision`: it succeeds only when the
/// stored record still carries `expected_revision`, and writes every field
/// of `complaint` (including its already-bumped revision) in one step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Look up one complaint.
    async fn find_by_id(
        &self,
        id: &ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError>;

    /// Filtered, ordered and optionally capped listing.
    async fn find(
        &self,
        search: &ComplaintSearch,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError>;

    /// Number of complaints matching `filter`.
    async fn count(&self, filter: &ComplaintFilter) -> Result<u64, ComplaintRepositoryError>;

    /// Store a newly filed complaint.
    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintRepositoryError>;

    /// Replace a stored complaint if its revision still matches.
    async fn update(
        &self,
        complaint: &Complaint,
        expected_revision: u32,
    ) -> Result<(), ComplaintRepositoryError>;

    /// Remove a complaint; `Missing` when nothing was stored under `id`.
    async fn delete(&self, id: &ComplaintId) -> Result<(), ComplaintRepositoryError>;
}

/// Fixture store that holds nothing and accepts every insert and update.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintRepository;

#[async_trait]
impl ComplaintRepository for FixtureComplaintRepository {
    async fn find_by_id(
        &self,
        _id: &ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        Ok(None)
    }

    async fn find(
        &self,
        _search: &ComplaintSearch,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self, _filter: &ComplaintFilter) -> Result<u64, ComplaintRepositoryError> {
        Ok(0)
    }

    async fn insert(&self, _complaint: &Complaint) -> Result<(), ComplaintRepositoryError> {
        Ok(())
    }

    async fn update(
        &self,
        _complaint: &Complaint,
        _expected_revision: u32,
    ) -> Result<(), ComplaintRepositoryError> {
        Ok(())
    }

    async fn delete(&self, id: &ComplaintId) -> Result<(), ComplaintRepositoryError> {
        Err(ComplaintRepositoryError::missing(*id))
    }
}
