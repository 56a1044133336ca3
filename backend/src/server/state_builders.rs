//! Wiring of domain services onto the chosen storage adapters.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::warn;

use complaint_desk::domain::ports::{ComplaintRepository, UserDirectory};
use complaint_desk::domain::{
    AnalyticsService, ComplaintIntakeService, ComplaintLifecycleService, ComplaintQueryService,
    DashboardService, UsersQueryService,
};
use complaint_desk::inbound::http::state::HttpState;
use complaint_desk::outbound::memory::{InMemoryComplaintRepository, InMemoryUserDirectory};
use complaint_desk::outbound::persistence::{
    DbPool, DieselComplaintRepository, DieselUserDirectory,
};

use super::ServerConfig;

/// Build every driving port over one complaint store and one directory.
fn services_over<R, U>(complaints: Arc<R>, users: Arc<U>, clock: Arc<dyn Clock>) -> HttpState
where
    R: ComplaintRepository + 'static,
    U: UserDirectory + 'static,
{
    HttpState {
        intake: Arc::new(ComplaintIntakeService::new(
            Arc::clone(&complaints),
            Arc::clone(&users),
            Arc::clone(&clock),
        )),
        complaints: Arc::new(ComplaintQueryService::new(
            Arc::clone(&complaints),
            Arc::clone(&users),
        )),
        lifecycle: Arc::new(ComplaintLifecycleService::new(
            Arc::clone(&complaints),
            Arc::clone(&users),
            Arc::clone(&clock),
        )),
        analytics: Arc::new(AnalyticsService::new(
            Arc::clone(&complaints),
            Arc::clone(&users),
            clock,
        )),
        dashboard: Arc::new(DashboardService::new(complaints, Arc::clone(&users))),
        users: Arc::new(UsersQueryService::new(users)),
    }
}

fn postgres_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    services_over(
        Arc::new(DieselComplaintRepository::new(pool.clone())),
        Arc::new(DieselUserDirectory::new(pool.clone())),
        clock,
    )
}

fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    warn!("no database configured; complaints are kept in memory and lost on restart");
    services_over(
        Arc::new(InMemoryComplaintRepository::new()),
        Arc::new(InMemoryUserDirectory::default()),
        clock,
    )
}

/// HTTP state over PostgreSQL when a pool is configured, else memory.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => postgres_state(pool, clock),
        None => in_memory_state(clock),
    }
}
