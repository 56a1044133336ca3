//! Row shapes returned by the analytics views.
//!
//! Every type serialises in camelCase so the dashboard can consume it
//! directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ComplaintCategory, ComplaintPriority, ComplaintStatus, Department, UserId};

/// Per-category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: ComplaintCategory,
    pub count: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// Per-department counts over assigned complaints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub department: Department,
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

/// Per-priority counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriorityStat {
    pub priority: ComplaintPriority,
    pub count: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// Share of the corpus in one status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub status: ComplaintStatus,
    pub count: u64,
    /// Percentage of the total, two decimal places.
    #[schema(example = 33.33)]
    pub percentage: f64,
}

/// Complaint counts per owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStat {
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
    /// Empty when the directory no longer knows the owner.
    pub name: String,
    pub email: String,
    pub total_complaints: u64,
    pub pending: u64,
    pub resolved: u64,
}

/// Workload per assigned staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeStat {
    pub staff_name: String,
    /// Department of the staff member's most recently updated assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub total_assigned: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// Complaints filed in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub count: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// Complaints filed in one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    /// ISO week-numbering year.
    pub year: i32,
    pub week: u32,
    /// Monday opening the week.
    pub week_start: NaiveDate,
    pub count: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// A recurring complaint title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrequentIssue {
    pub title: String,
    /// Category of the most recently filed complaint with this title.
    pub category: ComplaintCategory,
    pub count: u64,
    /// Mean days to resolution, two decimal places; `null` when none resolved.
    pub avg_resolution_time: Option<f64>,
}

/// Corpus-wide headline figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_complaints: u64,
    /// Distinct owning users.
    pub total_users: u64,
    /// Resolved or Closed as a percentage of the total, two decimal places.
    pub resolution_rate: f64,
    /// Mean days to resolution, two decimal places.
    pub avg_resolution_days: f64,
}
