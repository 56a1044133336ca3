//! Dashboard composer: status counters plus the latest complaints.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::try_join;
use tracing::debug;

use crate::domain::complaint_service_support::{join_owners, map_repository_error};
use crate::domain::ports::{
    ComplaintRepository, DashboardQuery, DashboardSnapshot, RECENT_COMPLAINTS, UserDirectory,
};
use crate::domain::{ComplaintFilter, ComplaintSearch, ComplaintStatus, Error};

#[derive(Clone)]
pub struct DashboardService<R, U> {
    complaints: Arc<R>,
    users: Arc<U>,
}

impl<R, U> DashboardService<R, U> {
    pub fn new(complaints: Arc<R>, users: Arc<U>) -> Self {
        Self { complaints, users }
    }
}

impl<R, U> DashboardService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn count(&self, filter: ComplaintFilter) -> Result<u64, Error> {
        self.complaints
            .count(&filter)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R, U> DashboardQuery for DashboardService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn snapshot(&self) -> Result<DashboardSnapshot, Error> {
        let recent = async {
            self.complaints
                .find(&ComplaintSearch::most_recent(RECENT_COMPLAINTS))
                .await
                .map_err(map_repository_error)
        };
        let (total, pending, in_progress, resolved, closed, recent) = try_join!(
            self.count(ComplaintFilter::default()),
            self.count(ComplaintFilter::with_status(ComplaintStatus::Pending)),
            self.count(ComplaintFilter::with_status(ComplaintStatus::InProgress)),
            self.count(ComplaintFilter::with_status(ComplaintStatus::Resolved)),
            self.count(ComplaintFilter::with_status(ComplaintStatus::Closed)),
            recent,
        )?;
        debug!(total, recent = recent.len(), "dashboard snapshot computed");

        Ok(DashboardSnapshot {
            total,
            pending,
            in_progress,
            resolved,
            closed,
            recent_complaints: join_owners(self.users.as_ref(), &recent).await?,
        })
    }
}
