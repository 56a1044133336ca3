//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data<HttpState>` and so depend only
//! on domain ports, which keeps them testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AnalyticsQuery, ComplaintIntake, ComplaintLifecycle, ComplaintQuery, DashboardQuery,
    FixtureAnalyticsQuery, FixtureComplaintIntake, FixtureComplaintLifecycle,
    FixtureComplaintQuery, FixtureDashboardQuery, FixtureUsersQuery, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use complaint_desk::domain::ports::FixtureDashboardQuery;
/// use complaint_desk::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     dashboard: Arc::new(FixtureDashboardQuery),
///     ..HttpState::default()
/// };
/// let _dashboard = state.dashboard.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub intake: Arc<dyn ComplaintIntake>,
    pub complaints: Arc<dyn ComplaintQuery>,
    pub lifecycle: Arc<dyn ComplaintLifecycle>,
    pub analytics: Arc<dyn AnalyticsQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub users: Arc<dyn UsersQuery>,
}

impl Default for HttpState {
    /// State wired to fixture ports; override the fields a test exercises.
    fn default() -> Self {
        Self {
            intake: Arc::new(FixtureComplaintIntake),
            complaints: Arc::new(FixtureComplaintQuery),
            lifecycle: Arc::new(FixtureComplaintLifecycle),
            analytics: Arc::new(FixtureAnalyticsQuery),
            dashboard: Arc::new(FixtureDashboardQuery),
            users: Arc::new(FixtureUsersQuery),
        }
    }
}
