//! Assignment snapshot value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Department;

/// Department and staff member a complaint is routed to.
///
/// `staff_name` is a snapshot copied from the user directory at assignment
/// time. It is not a live reference: renaming or removing the user later
/// leaves the recorded name untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub department: Option<Department>,
    pub staff_name: Option<String>,
    /// When the complaint was last routed. Later status changes or
    /// responses leave it alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Re-route to `department` at `at`, replacing the staff snapshot only
    /// when a new one is supplied.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use complaint_desk::domain::{Assignment, Department};
    ///
    /// let first = Assignment::default().reassigned(
    ///     Department::Billing,
    ///     Some("Alice".to_owned()),
    ///     Utc::now(),
    /// );
    /// let second = first.reassigned(Department::Technical, None, Utc::now());
    /// assert_eq!(second.department, Some(Department::Technical));
    /// assert_eq!(second.staff_name.as_deref(), Some("Alice"));
    /// ```
    #[must_use]
    pub fn reassigned(
        &self,
        department: Department,
        staff_name: Option<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            department: Some(department),
            staff_name: staff_name.or_else(|| self.staff_name.clone()),
            assigned_at: Some(at),
        }
    }
}
