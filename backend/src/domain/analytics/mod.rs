//! Aggregation engine.
//!
//! Ten summary views over the complaint corpus, recomputed from the record
//! store on every request. Each view is a specialisation of
//! [`grouping::group_by`], which partitions complaints by a key and tallies
//! their statuses; view-specific metrics (percentages, resolution times,
//! directory joins) are layered on the resulting groups.
//!
//! Rounding is to two decimal places throughout. Groups keyed by a closed
//! enum follow declaration order; ranked views break ties by key ascending.

mod grouping;
mod report;
mod trends;
mod views;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;
use tracing::debug;

use crate::domain::complaint_service_support::{directory_entries, map_repository_error};
use crate::domain::ports::{
    AnalyticsQuery, ComplaintRepository, DEFAULT_TOP_N, DEFAULT_WEEK_COUNT, UserDirectory,
};
use crate::domain::{Complaint, ComplaintFilter, ComplaintSearch, Error};

pub use self::grouping::{Group, StatusTally, group_by};
pub use self::report::{
    AssigneeStat, CategoryStat, DepartmentStat, FrequentIssue, MonthlyTrend, OverallStats,
    PriorityStat, StatusShare, UserStat, WeeklyTrend,
};

/// Analytics service implementing [`AnalyticsQuery`].
#[derive(Clone)]
pub struct AnalyticsService<R, U> {
    complaints: Arc<R>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<R, U> AnalyticsService<R, U> {
    pub fn new(complaints: Arc<R>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            complaints,
            users,
            clock,
        }
    }
}

impl<R, U> AnalyticsService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn corpus(&self, filter: ComplaintFilter) -> Result<Vec<Complaint>, Error> {
        let records = self
            .complaints
            .find(&ComplaintSearch::matching(filter))
            .await
            .map_err(map_repository_error)?;
        debug!(records = records.len(), "analytics corpus loaded");
        Ok(records)
    }
}

#[async_trait]
impl<R, U> AnalyticsQuery for AnalyticsService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn category_stats(&self, filter: ComplaintFilter) -> Result<Vec<CategoryStat>, Error> {
        Ok(views::category_stats(&self.corpus(filter).await?))
    }

    async fn department_stats(
        &self,
        filter: ComplaintFilter,
    ) -> Result<Vec<DepartmentStat>, Error> {
        Ok(views::department_stats(&self.corpus(filter).await?))
    }

    async fn priority_stats(&self, filter: ComplaintFilter) -> Result<Vec<PriorityStat>, Error> {
        Ok(views::priority_stats(&self.corpus(filter).await?))
    }

    async fn status_breakdown(&self, filter: ComplaintFilter) -> Result<Vec<StatusShare>, Error> {
        Ok(views::status_breakdown(&self.corpus(filter).await?))
    }

    async fn user_stats(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<UserStat>, Error> {
        let records = self.corpus(filter).await?;
        let directory = directory_entries(self.users.as_ref(), &views::owners(&records)).await?;
        Ok(views::user_stats(
            &records,
            &directory,
            top_n.unwrap_or(DEFAULT_TOP_N),
        ))
    }

    async fn assignee_stats(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<AssigneeStat>, Error> {
        let records = self.corpus(filter).await?;
        Ok(views::assignee_stats(
            &records,
            top_n.unwrap_or(DEFAULT_TOP_N),
        ))
    }

    async fn monthly_trends(
        &self,
        filter: ComplaintFilter,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyTrend>, Error> {
        let year = year.unwrap_or_else(|| self.clock.utc().year());
        Ok(trends::monthly_trends(&self.corpus(filter).await?, year))
    }

    async fn weekly_trends(
        &self,
        filter: ComplaintFilter,
        week_count: Option<u32>,
    ) -> Result<Vec<WeeklyTrend>, Error> {
        let now = self.clock.utc();
        Ok(trends::weekly_trends(
            &self.corpus(filter).await?,
            now,
            week_count.unwrap_or(DEFAULT_WEEK_COUNT),
        ))
    }

    async fn frequent_issues(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<FrequentIssue>, Error> {
        let records = self.corpus(filter).await?;
        Ok(views::frequent_issues(
            &records,
            top_n.unwrap_or(DEFAULT_TOP_N),
        ))
    }

    async fn overall_stats(&self, filter: ComplaintFilter) -> Result<OverallStats, Error> {
        Ok(views::overall_stats(&self.corpus(filter).await?))
    }
}

#[cfg(test)]
mod tests;
