//! Driving port for the analytics views.
//!
//! Every view is independently requestable and recomputed from the record
//! store on each call. Empty corpora produce empty rows or zeroed
//! summaries, never errors.

use async_trait::async_trait;

use crate::domain::{
    AssigneeStat, CategoryStat, ComplaintFilter, DepartmentStat, Error, FrequentIssue,
    MonthlyTrend, OverallStats, PriorityStat, StatusShare, UserStat, WeeklyTrend,
};

/// Default row cap for the ranked views.
pub const DEFAULT_TOP_N: usize = 10;
/// Default trailing window for weekly trends.
pub const DEFAULT_WEEK_COUNT: u32 = 12;

/// Read-only aggregation queries. `filter` narrows the corpus first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsQuery: Send + Sync {
    async fn category_stats(&self, filter: ComplaintFilter) -> Result<Vec<CategoryStat>, Error>;

    async fn department_stats(
        &self,
        filter: ComplaintFilter,
    ) -> Result<Vec<DepartmentStat>, Error>;

    async fn priority_stats(&self, filter: ComplaintFilter) -> Result<Vec<PriorityStat>, Error>;

    async fn status_breakdown(&self, filter: ComplaintFilter) -> Result<Vec<StatusShare>, Error>;

    /// Top owners by complaint count; `top_n` defaults to [`DEFAULT_TOP_N`].
    async fn user_stats(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<UserStat>, Error>;

    /// Top staff by assignment count; `top_n` defaults to [`DEFAULT_TOP_N`].
    async fn assignee_stats(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<AssigneeStat>, Error>;

    /// Per-month counts; `year` defaults to the current UTC year.
    async fn monthly_trends(
        &self,
        filter: ComplaintFilter,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyTrend>, Error>;

    /// Per-ISO-week counts; `week_count` defaults to [`DEFAULT_WEEK_COUNT`].
    async fn weekly_trends(
        &self,
        filter: ComplaintFilter,
        week_count: Option<u32>,
    ) -> Result<Vec<WeeklyTrend>, Error>;

    /// Most repeated titles; `top_n` defaults to [`DEFAULT_TOP_N`].
    async fn frequent_issues(
        &self,
        filter: ComplaintFilter,
        top_n: Option<usize>,
    ) -> Result<Vec<FrequentIssue>, Error>;

    async fn overall_stats(&self, filter: ComplaintFilter) -> Result<OverallStats, Error>;
}

/// Fixture analytics over an empty corpus.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAnalyticsQuery;

#[async_trait]
impl AnalyticsQuery for FixtureAnalyticsQuery {
    async fn category_stats(&self, _filter: ComplaintFilter) -> Result<Vec<CategoryStat>, Error> {
        Ok(Vec::new())
    }

    async fn department_stats(
        &self,
        _filter: ComplaintFilter,
    ) -> Result<Vec<DepartmentStat>, Error> {
        Ok(Vec::new())
    }

    async fn priority_stats(&self, _filter: ComplaintFilter) -> Result<Vec<PriorityStat>, Error> {
        Ok(Vec::new())
    }

    async fn status_breakdown(
        &self,
        _filter: ComplaintFilter,
    ) -> Result<Vec<StatusShare>, Error> {
        Ok(Vec::new())
    }

    async fn user_stats(
        &self,
        _filter: ComplaintFilter,
        _top_n: Option<usize>,
    ) -> Result<Vec<UserStat>, Error> {
        Ok(Vec::new())
    }

    async fn assignee_stats(
        &self,
        _filter: ComplaintFilter,
        _top_n: Option<usize>,
    ) -> Result<Vec<AssigneeStat>, Error> {
        Ok(Vec::new())
    }

    async fn monthly_trends(
        &self,
        _filter: ComplaintFilter,
        _year: Option<i32>,
    ) -> Result<Vec<MonthlyTrend>, Error> {
        Ok(Vec::new())
    }

    async fn weekly_trends(
        &self,
        _filter: ComplaintFilter,
        _week_count: Option<u32>,
    ) -> Result<Vec<WeeklyTrend>, Error> {
        Ok(Vec::new())
    }

    async fn frequent_issues(
        &self,
        _filter: ComplaintFilter,
        _top_n: Option<usize>,
    ) -> Result<Vec<FrequentIssue>, Error> {
        Ok(Vec::new())
    }

    async fn overall_stats(&self, _filter: ComplaintFilter) -> Result<OverallStats, Error> {
        Ok(OverallStats::default())
    }
}
