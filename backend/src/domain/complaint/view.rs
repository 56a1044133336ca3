//! Read model returned by complaint operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    Assignment, Complaint, ComplaintCategory, ComplaintId, ComplaintPriority, ComplaintStatus,
};
use crate::domain::OwnerIdentity;

/// A complaint joined with its owner's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    #[schema(value_type = String, format = "uuid")]
    pub id: ComplaintId,
    pub user: OwnerIdentity,
    #[schema(example = "Router keeps dropping")]
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ComplaintView {
    /// Join `complaint` with `owner`.
    #[must_use]
    pub fn new(complaint: &Complaint, owner: OwnerIdentity) -> Self {
        Self {
            id: complaint.id(),
            user: owner,
            title: complaint.title().to_owned(),
            description: complaint.description().to_owned(),
            category: complaint.category(),
            priority: complaint.priority(),
            status: complaint.status(),
            assigned_to: complaint.assigned_to().cloned(),
            admin_response: complaint.admin_response().map(str::to_owned),
            created_at: complaint.created_at(),
            updated_at: complaint.updated_at(),
            resolved_at: complaint.resolved_at(),
        }
    }
}
