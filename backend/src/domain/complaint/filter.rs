//! Query criteria for the complaint record store.

use super::{Complaint, ComplaintCategory, ComplaintPriority, ComplaintStatus, Department};
use crate::domain::UserId;

/// Conjunctive filter over complaints. `None` fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub category: Option<ComplaintCategory>,
    pub priority: Option<ComplaintPriority>,
    pub user: Option<UserId>,
    pub department: Option<Department>,
}

impl ComplaintFilter {
    /// Filter restricted to one owner.
    #[must_use]
    pub fn for_user(user: UserId) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Filter restricted to one status.
    #[must_use]
    pub fn with_status(status: ComplaintStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Whether `complaint` satisfies every populated criterion.
    #[must_use]
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.is_none_or(|s| complaint.status() == s)
            && self.category.is_none_or(|c| complaint.category() == c)
            && self.priority.is_none_or(|p| complaint.priority() == p)
            && self.user.is_none_or(|u| complaint.user() == u)
            && self
                .department
                .is_none_or(|d| complaint.department() == Some(d))
    }
}

/// Filter and optional cap for a store query.
///
/// Results always come back newest first, with the id breaking ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintSearch {
    pub filter: ComplaintFilter,
    pub limit: Option<usize>,
}

impl ComplaintSearch {
    /// Every complaint matching `filter`, newest first.
    #[must_use]
    pub fn matching(filter: ComplaintFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// The `limit` most recently created complaints.
    #[must_use]
    pub fn most_recent(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}
