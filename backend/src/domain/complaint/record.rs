//! The complaint entity and its mutation rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

use super::{
    Assignment, ComplaintCategory, ComplaintPriority, ComplaintStatus, ComplaintValidationError,
    Department,
};

/// Minimum trimmed title length accepted at intake.
pub const TITLE_MIN: usize = 5;
/// Minimum trimmed description length accepted at intake.
pub const DESCRIPTION_MIN: usize = 10;

/// Opaque complaint identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ComplaintId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Validated intake payload for [`Complaint::file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub user: UserId,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub priority: Option<ComplaintPriority>,
}

/// Every stored field of a complaint, used by adapters to rehydrate records.
///
/// Intake rules are not re-checked on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintSnapshot {
    pub id: ComplaintId,
    pub user: UserId,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub assigned_to: Option<Assignment>,
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub revision: u32,
}

/// A user-filed complaint.
///
/// ## Invariants
/// - `user`, `id` and `created_at` never change after filing.
/// - every mutation refreshes `updated_at` and bumps `revision` by one.
/// - `resolved_at` is set exactly while `status` is Resolved or Closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    id: ComplaintId,
    user: UserId,
    title: String,
    description: String,
    category: ComplaintCategory,
    priority: ComplaintPriority,
    status: ComplaintStatus,
    assigned_to: Option<Assignment>,
    admin_response: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
    revision: u32,
}

impl Complaint {
    /// File a new complaint: Pending, unassigned, no response.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use complaint_desk::domain::{
    ///     Complaint, ComplaintCategory, ComplaintDraft, ComplaintId, ComplaintPriority,
    ///     ComplaintStatus, UserId,
    /// };
    ///
    /// let complaint = Complaint::file(
    ///     ComplaintId::random(),
    ///     ComplaintDraft {
    ///         user: UserId::random(),
    ///         title: "Router keeps dropping".to_owned(),
    ///         description: "Connection drops every evening".to_owned(),
    ///         category: ComplaintCategory::Technical,
    ///         priority: None,
    ///     },
    ///     Utc::now(),
    /// )
    /// .expect("valid draft");
    /// assert_eq!(complaint.status(), ComplaintStatus::Pending);
    /// assert_eq!(complaint.priority(), ComplaintPriority::Medium);
    /// ```
    pub fn file(
        id: ComplaintId,
        draft: ComplaintDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ComplaintValidationError> {
        let title = draft.title.trim().to_owned();
        if title.chars().count() < TITLE_MIN {
            return Err(ComplaintValidationError::TitleTooShort { min: TITLE_MIN });
        }
        let description = draft.description.trim().to_owned();
        if description.chars().count() < DESCRIPTION_MIN {
            return Err(ComplaintValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN,
            });
        }

        Ok(Self {
            id,
            user: draft.user,
            title,
            description,
            category: draft.category,
            priority: draft.priority.unwrap_or_default(),
            status: ComplaintStatus::Pending,
            assigned_to: None,
            admin_response: None,
            created_at: now,
            updated_at: now,
            resolved_at: None,
            revision: 1,
        })
    }

    /// Rehydrate a stored complaint.
    #[must_use]
    pub fn restore(snapshot: ComplaintSnapshot) -> Self {
        let ComplaintSnapshot {
            id,
            user,
            title,
            description,
            category,
            priority,
            status,
            assigned_to,
            admin_response,
            created_at,
            updated_at,
            resolved_at,
            revision,
        } = snapshot;
        Self {
            id,
            user,
            title,
            description,
            category,
            priority,
            status,
            assigned_to,
            admin_response,
            created_at,
            updated_at,
            resolved_at,
            revision,
        }
    }

    /// Route the complaint to a department, optionally naming a staff member.
    ///
    /// Without a staff name the previous snapshot is kept. A Pending complaint
    /// starts work on first assignment; other statuses are left alone.
    pub fn assign(
        &mut self,
        department: Department,
        staff_name: Option<String>,
        now: DateTime<Utc>,
    ) {
        let current = self.assigned_to.take().unwrap_or_default();
        self.assigned_to = Some(current.reassigned(department, staff_name, now));
        if self.status == ComplaintStatus::Pending {
            self.status = ComplaintStatus::InProgress;
        }
        self.touch(now);
    }

    /// Overwrite the status. Any value is accepted, including backward moves.
    pub fn set_status(&mut self, status: ComplaintStatus, now: DateTime<Utc>) {
        self.resolved_at = match (status.is_resolution(), self.resolved_at) {
            (true, Some(stamped)) => Some(stamped),
            (true, None) => Some(now),
            (false, _) => None,
        };
        self.status = status;
        self.touch(now);
    }

    /// Overwrite the admin response. Status is not affected.
    pub fn respond(
        &mut self,
        response: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ComplaintValidationError> {
        let response = response.trim();
        if response.is_empty() {
            return Err(ComplaintValidationError::EmptyResponse);
        }
        self.admin_response = Some(response.to_owned());
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.revision = self.revision.saturating_add(1);
    }

    /// Time from filing to resolution, for complaints in Resolved or Closed.
    ///
    /// Records resolved before `resolved_at` was tracked fall back to their
    /// last update.
    #[must_use]
    pub fn resolution_time(&self) -> Option<chrono::TimeDelta> {
        if !self.status.is_resolution() {
            return None;
        }
        let resolved = self.resolved_at.unwrap_or(self.updated_at);
        Some(resolved - self.created_at)
    }

    #[must_use]
    pub fn id(&self) -> ComplaintId {
        self.id
    }

    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> ComplaintCategory {
        self.category
    }

    #[must_use]
    pub fn priority(&self) -> ComplaintPriority {
        self.priority
    }

    #[must_use]
    pub fn status(&self) -> ComplaintStatus {
        self.status
    }

    #[must_use]
    pub fn assigned_to(&self) -> Option<&Assignment> {
        self.assigned_to.as_ref()
    }

    /// Department from the current assignment, if any.
    #[must_use]
    pub fn department(&self) -> Option<Department> {
        self.assigned_to.as_ref().and_then(|a| a.department)
    }

    /// Staff name snapshot from the current assignment, if any.
    #[must_use]
    pub fn staff_name(&self) -> Option<&str> {
        self.assigned_to
            .as_ref()
            .and_then(|a| a.staff_name.as_deref())
    }

    /// When the complaint was last routed, if ever.
    #[must_use]
    pub fn assigned_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_to.as_ref().and_then(|a| a.assigned_at)
    }

    #[must_use]
    pub fn admin_response(&self) -> Option<&str> {
        self.admin_response.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Optimistic-concurrency revision; starts at 1.
    #[must_use]
    pub fn revision(&self) -> u32 {
        self.revision
    }
}
