//! Read-only analytics routes, one per report view.
//!
//! Every route accepts the listing filters (`status`, `category`,
//! `priority`, `department`). Ranked views also take `limit`, monthly
//! trends take `year` and weekly trends take `weeks`.
//!
//! ```text
//! GET /api/v1/analytics/overall-stats
//! GET /api/v1/analytics/weekly-trends?weeks=4&category=Billing
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AssigneeStat, CategoryStat, ComplaintFilter, DepartmentStat, Error, FrequentIssue,
    MonthlyTrend, OverallStats, PriorityStat, StatusShare, UserStat, WeeklyTrend,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::admin::complaint_filter;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query parameters shared by the analytics routes.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnalyticsParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    /// Rows kept by ranked views; defaults to 10.
    pub limit: Option<usize>,
    /// Calendar year for monthly trends; defaults to the current year.
    pub year: Option<i32>,
    /// Trailing ISO weeks for weekly trends; defaults to 12.
    pub weeks: Option<u32>,
}

impl AnalyticsParams {
    fn to_filter(&self) -> Result<ComplaintFilter, Error> {
        complaint_filter(
            self.status.as_deref(),
            self.category.as_deref(),
            self.priority.as_deref(),
            self.department.as_deref(),
        )
    }
}

/// Admin check plus filter parsing, shared by every route here.
fn admin_filter(session: &SessionContext, params: &AnalyticsParams) -> ApiResult<ComplaintFilter> {
    session.require_admin()?;
    params.to_filter()
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/overall-stats",
    params(AnalyticsParams),
    responses(
        (status = 200, description = "Totals, resolution rate and mean resolution days", body = OverallStats),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["analytics"],
    operation_id = "overallStats"
)]
#[get("/overall-stats")]
pub async fn overall_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<OverallStats>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.overall_stats(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/category-stats",
    params(AnalyticsParams),
    responses((status = 200, description = "Per-category counts", body = [CategoryStat])),
    tags = ["analytics"],
    operation_id = "categoryStats"
)]
#[get("/category-stats")]
pub async fn category_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<CategoryStat>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.category_stats(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/department-stats",
    params(AnalyticsParams),
    responses((status = 200, description = "Per-department counts of assigned complaints", body = [DepartmentStat])),
    tags = ["analytics"],
    operation_id = "departmentStats"
)]
#[get("/department-stats")]
pub async fn department_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<DepartmentStat>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.department_stats(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/priority-stats",
    params(AnalyticsParams),
    responses((status = 200, description = "Per-priority counts", body = [PriorityStat])),
    tags = ["analytics"],
    operation_id = "priorityStats"
)]
#[get("/priority-stats")]
pub async fn priority_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<PriorityStat>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.priority_stats(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/status-breakdown",
    params(AnalyticsParams),
    responses((status = 200, description = "Share of each status", body = [StatusShare])),
    tags = ["analytics"],
    operation_id = "statusBreakdown"
)]
#[get("/status-breakdown")]
pub async fn status_breakdown(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<StatusShare>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.status_breakdown(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/user-stats",
    params(AnalyticsParams),
    responses((status = 200, description = "Owners ranked by complaint count", body = [UserStat])),
    tags = ["analytics"],
    operation_id = "userStats"
)]
#[get("/user-stats")]
pub async fn user_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<UserStat>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(state.analytics.user_stats(filter, params.limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/assigned-user-stats",
    params(AnalyticsParams),
    responses((status = 200, description = "Staff ranked by assignment count", body = [AssigneeStat])),
    tags = ["analytics"],
    operation_id = "assignedUserStats"
)]
#[get("/assigned-user-stats")]
pub async fn assignee_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<AssigneeStat>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(
        state.analytics.assignee_stats(filter, params.limit).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/monthly-trends",
    params(AnalyticsParams),
    responses((status = 200, description = "Per-month counts for one year", body = [MonthlyTrend])),
    tags = ["analytics"],
    operation_id = "monthlyTrends"
)]
#[get("/monthly-trends")]
pub async fn monthly_trends(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<MonthlyTrend>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(
        state.analytics.monthly_trends(filter, params.year).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/weekly-trends",
    params(AnalyticsParams),
    responses((status = 200, description = "Per-ISO-week counts", body = [WeeklyTrend])),
    tags = ["analytics"],
    operation_id = "weeklyTrends"
)]
#[get("/weekly-trends")]
pub async fn weekly_trends(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<WeeklyTrend>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(
        state.analytics.weekly_trends(filter, params.weeks).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/frequent-issues",
    params(AnalyticsParams),
    responses((status = 200, description = "Most repeated titles", body = [FrequentIssue])),
    tags = ["analytics"],
    operation_id = "frequentIssues"
)]
#[get("/frequent-issues")]
pub async fn frequent_issues(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AnalyticsParams>,
) -> ApiResult<web::Json<Vec<FrequentIssue>>> {
    let filter = admin_filter(&session, &params)?;
    Ok(web::Json(
        state.analytics.frequent_issues(filter, params.limit).await?,
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::ports::MockAnalyticsQuery;
    use crate::domain::{ComplaintCategory, ComplaintStatus, OverallStats, UserId};
    use crate::inbound::http::session::Role;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{call, login_cookie};

    fn state_with(analytics: MockAnalyticsQuery) -> HttpState {
        HttpState {
            analytics: Arc::new(analytics),
            ..HttpState::default()
        }
    }

    async fn admin_get(state: HttpState, uri: &str) -> (StatusCode, Value) {
        let cookie = login_cookie(UserId::random(), Role::Admin).await;
        let response = call(
            state,
            test::TestRequest::get().uri(uri).cookie(cookie),
        )
        .await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn overall_stats_passes_filter_through() {
        let mut analytics = MockAnalyticsQuery::new();
        let expected = crate::domain::ComplaintFilter {
            category: Some(ComplaintCategory::Billing),
            status: Some(ComplaintStatus::InProgress),
            ..Default::default()
        };
        analytics
            .expect_overall_stats()
            .with(eq(expected))
            .times(1)
            .return_once(|_| {
                Ok(OverallStats {
                    total_complaints: 4,
                    total_users: 2,
                    resolution_rate: 50.0,
                    avg_resolution_days: 3.5,
                })
            });

        let (status, body) = admin_get(
            state_with(analytics),
            "/api/v1/analytics/overall-stats?category=Billing&status=In-Progress",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalComplaints"], 4);
        assert_eq!(body["avgResolutionDays"], 3.5);
    }

    #[rstest]
    #[actix_web::test]
    async fn ranked_views_forward_limit() {
        let mut analytics = MockAnalyticsQuery::new();
        analytics
            .expect_frequent_issues()
            .withf(|_, top_n| *top_n == Some(3))
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let (status, body) = admin_get(
            state_with(analytics),
            "/api/v1/analytics/frequent-issues?limit=3",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn weekly_trends_forward_week_count() {
        let mut analytics = MockAnalyticsQuery::new();
        analytics
            .expect_weekly_trends()
            .withf(|_, weeks| *weeks == Some(4))
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let (status, _) = admin_get(
            state_with(analytics),
            "/api/v1/analytics/weekly-trends?weeks=4",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_filter_value_is_rejected_before_querying() {
        let mut analytics = MockAnalyticsQuery::new();
        analytics.expect_category_stats().never();

        let (status, body) = admin_get(
            state_with(analytics),
            "/api/v1/analytics/category-stats?priority=Urgent",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "priority");
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_limit_is_invalid_request() {
        let (status, body) = admin_get(
            HttpState::default(),
            "/api/v1/analytics/user-stats?limit=many",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
    }

    #[rstest]
    #[actix_web::test]
    async fn plain_users_are_forbidden() {
        let cookie = login_cookie(UserId::random(), Role::User).await;
        let response = call(
            HttpState::default(),
            test::TestRequest::get()
                .uri("/api/v1/analytics/status-breakdown")
                .cookie(cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
