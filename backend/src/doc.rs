//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every complaint, admin, analytics and health
//! endpoint along with the domain types they exchange. Swagger UI serves the
//! document in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::analytics::{
    AssigneeStat, CategoryStat, DepartmentStat, FrequentIssue, MonthlyTrend, OverallStats,
    PriorityStat, StatusShare, UserStat, WeeklyTrend,
};
use crate::domain::ports::DashboardSnapshot;
use crate::domain::{
    Assignment, ComplaintCategory, ComplaintPriority, ComplaintStatus, ComplaintView, Department,
    DirectoryUser, Error, ErrorCode, OwnerIdentity,
};
use crate::inbound::http::admin::{AssignRequest, RespondRequest, StatusUpdateRequest};
use crate::inbound::http::complaints::FileComplaintRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Private session cookie carrying the caller's user id and role.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Complaint desk API",
        description = "Complaint intake, triage and reporting behind a session identity claim."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::complaints::file_complaint,
        crate::inbound::http::complaints::list_own_complaints,
        crate::inbound::http::complaints::get_own_complaint,
        crate::inbound::http::admin::dashboard,
        crate::inbound::http::admin::list_complaints,
        crate::inbound::http::admin::get_complaint,
        crate::inbound::http::admin::update_status,
        crate::inbound::http::admin::assign,
        crate::inbound::http::admin::respond,
        crate::inbound::http::admin::delete_complaint,
        crate::inbound::http::admin::list_users,
        crate::inbound::http::analytics::overall_stats,
        crate::inbound::http::analytics::category_stats,
        crate::inbound::http::analytics::department_stats,
        crate::inbound::http::analytics::priority_stats,
        crate::inbound::http::analytics::status_breakdown,
        crate::inbound::http::analytics::user_stats,
        crate::inbound::http::analytics::assignee_stats,
        crate::inbound::http::analytics::monthly_trends,
        crate::inbound::http::analytics::weekly_trends,
        crate::inbound::http::analytics::frequent_issues,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ComplaintView,
        OwnerIdentity,
        Assignment,
        ComplaintCategory,
        ComplaintPriority,
        ComplaintStatus,
        Department,
        DirectoryUser,
        DashboardSnapshot,
        OverallStats,
        CategoryStat,
        DepartmentStat,
        PriorityStat,
        StatusShare,
        UserStat,
        AssigneeStat,
        MonthlyTrend,
        WeeklyTrend,
        FrequentIssue,
        FileComplaintRequest,
        StatusUpdateRequest,
        AssignRequest,
        RespondRequest,
    )),
    tags(
        (name = "complaints", description = "Filing and reading your own complaints"),
        (name = "admin", description = "Triage: dashboard, listing, status, assignment and responses"),
        (name = "analytics", description = "Aggregate reports over the complaint corpus"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
