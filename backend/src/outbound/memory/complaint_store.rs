//! In-memory `ComplaintRepository`.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{Complaint, ComplaintFilter, ComplaintId, ComplaintSearch};

/// Complaint store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryComplaintRepository {
    records: RwLock<HashMap<ComplaintId, Complaint>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<ComplaintId, Complaint>>, ComplaintRepositoryError>
    {
        self.records
            .read()
            .map_err(|_| ComplaintRepositoryError::connection("complaint store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<ComplaintId, Complaint>>, ComplaintRepositoryError>
    {
        self.records
            .write()
            .map_err(|_| ComplaintRepositoryError::connection("complaint store lock poisoned"))
    }
}

fn newest_first(records: &mut [Complaint]) {
    // Id breaks created_at ties so listings are stable across calls.
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn find_by_id(
        &self,
        id: &ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find(
        &self,
        search: &ComplaintSearch,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let mut matching: Vec<Complaint> = self
            .read()?
            .values()
            .filter(|c| search.filter.matches(c))
            .cloned()
            .collect();
        newest_first(&mut matching);
        if let Some(limit) = search.limit {
            matching.truncate(limit);
        }
        Ok(matching)
    }

    async fn count(&self, filter: &ComplaintFilter) -> Result<u64, ComplaintRepositoryError> {
        let count = self.read()?.values().filter(|c| filter.matches(c)).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintRepositoryError> {
        let mut records = self.write()?;
        if records.contains_key(&complaint.id()) {
            return Err(ComplaintRepositoryError::query(format!(
                "complaint {} already exists",
                complaint.id()
            )));
        }
        records.insert(complaint.id(), complaint.clone());
        Ok(())
    }

    async fn update(
        &self,
        complaint: &Complaint,
        expected_revision: u32,
    ) -> Result<(), ComplaintRepositoryError> {
        let mut records = self.write()?;
        let stored = records
            .get_mut(&complaint.id())
            .ok_or_else(|| ComplaintRepositoryError::missing(complaint.id()))?;
        if stored.revision() != expected_revision {
            return Err(ComplaintRepositoryError::revision_mismatch(
                expected_revision,
                stored.revision(),
            ));
        }
        *stored = complaint.clone();
        Ok(())
    }

    async fn delete(&self, id: &ComplaintId) -> Result<(), ComplaintRepositoryError> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ComplaintRepositoryError::missing(*id))
    }
}
