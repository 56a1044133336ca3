//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`ComplaintRepository`, `UserDirectory`) are implemented by
//! outbound adapters. Driving ports are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod analytics_query;
mod complaint_intake;
mod complaint_lifecycle;
mod complaint_query;
mod complaint_repository;
mod dashboard_query;
mod user_directory;
mod users_query;

#[cfg(test)]
pub use analytics_query::MockAnalyticsQuery;
pub use analytics_query::{
    AnalyticsQuery, DEFAULT_TOP_N, DEFAULT_WEEK_COUNT, FixtureAnalyticsQuery,
};
#[cfg(test)]
pub use complaint_intake::MockComplaintIntake;
pub use complaint_intake::{ComplaintIntake, FixtureComplaintIntake};
#[cfg(test)]
pub use complaint_lifecycle::MockComplaintLifecycle;
pub use complaint_lifecycle::{
    AssignComplaintRequest, ComplaintLifecycle, FixtureComplaintLifecycle,
};
#[cfg(test)]
pub use complaint_query::MockComplaintQuery;
pub use complaint_query::{ComplaintQuery, FixtureComplaintQuery};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{
    ComplaintRepository, ComplaintRepositoryError, FixtureComplaintRepository,
};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::{
    DashboardQuery, DashboardSnapshot, FixtureDashboardQuery, RECENT_COMPLAINTS,
};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
