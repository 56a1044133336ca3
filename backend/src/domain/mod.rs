//! Domain primitives, services and ports.
//!
//! Purpose: hold the complaint lifecycle rules and the analytics engine
//! free of transport and storage concerns. Inbound adapters call the
//! driving ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - `Complaint` and its value types (`ComplaintStatus`, `Assignment`, ...).
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - Services: `ComplaintLifecycleService`, `ComplaintIntakeService`,
//!   `ComplaintQueryService`, `AnalyticsService`, `DashboardService`,
//!   `UsersQueryService`.

pub mod analytics;
pub mod complaint;
mod complaint_lifecycle_service;
mod complaint_service;
mod complaint_service_support;
mod dashboard_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_service;

pub use self::analytics::{
    AnalyticsService, AssigneeStat, CategoryStat, DepartmentStat, FrequentIssue, MonthlyTrend,
    OverallStats, PriorityStat, StatusShare, StatusTally, UserStat, WeeklyTrend,
};
pub use self::complaint::{
    Assignment, Complaint, ComplaintCategory, ComplaintDraft, ComplaintFilter, ComplaintId,
    ComplaintPriority, ComplaintSearch, ComplaintSnapshot, ComplaintStatus,
    ComplaintValidationError, ComplaintView, Department, ParseEnumError,
};
pub use self::complaint_lifecycle_service::{ComplaintLifecycleService, MAX_WRITE_ATTEMPTS};
pub use self::complaint_service::{ComplaintIntakeService, ComplaintQueryService};
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{DirectoryUser, OwnerIdentity, UserId, UserValidationError};
pub use self::users_service::UsersQueryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use complaint_desk::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("admins only"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
