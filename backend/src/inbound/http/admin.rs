//! Admin triage routes: dashboard, listing and the lifecycle operations.
//!
//! ```text
//! GET  /api/v1/admin/dashboard
//! GET  /api/v1/admin/complaints?status=Pending&category=Billing
//! GET  /api/v1/admin/complaints/{id}
//! PUT  /api/v1/admin/complaints/{id}/status  {"status":"Resolved"}
//! POST /api/v1/admin/complaints/{id}/assign  {"department":"Billing","userId":"..."}
//! POST /api/v1/admin/complaints/{id}/respond {"adminResponse":"Refund issued"}
//! DELETE /api/v1/admin/complaints/{id}
//! GET  /api/v1/admin/users
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::ports::{AssignComplaintRequest, DashboardSnapshot};
use crate::domain::{ComplaintFilter, ComplaintView, DirectoryUser, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_complaint_id, parse_enum, parse_optional_enum, parse_user_id, require,
};

/// Optional listing filters; each is a wire name such as `In-Progress`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ComplaintListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
}

impl ComplaintListParams {
    pub(crate) fn to_filter(&self) -> Result<ComplaintFilter, Error> {
        complaint_filter(
            self.status.as_deref(),
            self.category.as_deref(),
            self.priority.as_deref(),
            self.department.as_deref(),
        )
    }
}

/// Build a filter from raw wire names, naming the offending field on error.
pub(crate) fn complaint_filter(
    status: Option<&str>,
    category: Option<&str>,
    priority: Option<&str>,
    department: Option<&str>,
) -> Result<ComplaintFilter, Error> {
    Ok(ComplaintFilter {
        status: parse_optional_enum(status, FieldName::new("status"))?,
        category: parse_optional_enum(category, FieldName::new("category"))?,
        priority: parse_optional_enum(priority, FieldName::new("priority"))?,
        department: parse_optional_enum(department, FieldName::new("department"))?,
        user: None,
    })
}

/// Body of `PUT /api/v1/admin/complaints/{id}/status`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct StatusUpdateRequest {
    #[schema(example = "Resolved")]
    pub status: Option<String>,
}

/// Body of `POST /api/v1/admin/complaints/{id}/assign`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    #[schema(example = "Billing")]
    pub department: Option<String>,
    /// Staff member to snapshot onto the assignment.
    #[schema(format = "uuid")]
    pub user_id: Option<String>,
}

/// Body of `POST /api/v1/admin/complaints/{id}/respond`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    #[schema(example = "A refund has been issued")]
    pub admin_response: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Status counts and recent complaints", body = DashboardSnapshot),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardSnapshot>> {
    session.require_admin()?;
    Ok(web::Json(state.dashboard.snapshot().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/complaints",
    params(ComplaintListParams),
    responses(
        (status = 200, description = "Matching complaints, newest first", body = [ComplaintView]),
        (status = 400, description = "Unknown filter value", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminListComplaints"
)]
#[get("/complaints")]
pub async fn list_complaints(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<ComplaintListParams>,
) -> ApiResult<web::Json<Vec<ComplaintView>>> {
    session.require_admin()?;
    let filter = params.to_filter()?;
    Ok(web::Json(state.complaints.list_complaints(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint", body = ComplaintView),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminGetComplaint"
)]
#[get("/complaints/{id}")]
pub async fn get_complaint(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ComplaintView>> {
    session.require_admin()?;
    let id = parse_complaint_id(&path)?;
    Ok(web::Json(state.complaints.get_complaint(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/complaints/{id}/status",
    params(("id" = String, Path, description = "Complaint id")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Updated complaint", body = ComplaintView),
        (status = 400, description = "Missing or unknown status", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 409, description = "Concurrent updates kept winning", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateStatus"
)]
#[put("/complaints/{id}/status")]
pub async fn update_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<StatusUpdateRequest>,
) -> ApiResult<web::Json<ComplaintView>> {
    let admin = session.require_admin()?;
    let id = parse_complaint_id(&path)?;
    let raw = require(payload.into_inner().status, FieldName::new("status"))?;
    let status = parse_enum(&raw, FieldName::new("status"))?;
    info!(%admin, complaint_id = %id, %status, "status update requested");
    Ok(web::Json(state.lifecycle.update_status(id, status).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/complaints/{id}/assign",
    params(("id" = String, Path, description = "Complaint id")),
    request_body = AssignRequest,
    responses(
        (status = 200, description = "Assigned complaint", body = ComplaintView),
        (status = 400, description = "Missing or unknown department", body = Error),
        (status = 404, description = "Complaint or staff member not found", body = Error),
        (status = 409, description = "Concurrent updates kept winning", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminAssignComplaint"
)]
#[post("/complaints/{id}/assign")]
pub async fn assign(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<AssignRequest>,
) -> ApiResult<web::Json<ComplaintView>> {
    let admin = session.require_admin()?;
    let complaint_id = parse_complaint_id(&path)?;
    let AssignRequest {
        department,
        user_id,
    } = payload.into_inner();
    let department = require(department, FieldName::new("department"))?;
    let request = AssignComplaintRequest {
        complaint_id,
        department: parse_enum(&department, FieldName::new("department"))?,
        staff_id: user_id
            .as_deref()
            .map(|raw| parse_user_id(raw, FieldName::new("userId")))
            .transpose()?,
    };
    info!(%admin, %complaint_id, department = %request.department, "assignment requested");
    Ok(web::Json(state.lifecycle.assign(request).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/complaints/{id}/respond",
    params(("id" = String, Path, description = "Complaint id")),
    request_body = RespondRequest,
    responses(
        (status = 200, description = "Complaint with response", body = ComplaintView),
        (status = 400, description = "Missing or blank response", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminRespond"
)]
#[post("/complaints/{id}/respond")]
pub async fn respond(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<RespondRequest>,
) -> ApiResult<web::Json<ComplaintView>> {
    session.require_admin()?;
    let id = parse_complaint_id(&path)?;
    let text = require(
        payload.into_inner().admin_response,
        FieldName::new("adminResponse"),
    )?;
    Ok(web::Json(state.lifecycle.respond(id, text).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    responses(
        (status = 204, description = "Complaint deleted"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteComplaint"
)]
#[delete("/complaints/{id}")]
pub async fn delete_complaint(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let admin = session.require_admin()?;
    let id = parse_complaint_id(&path)?;
    info!(%admin, complaint_id = %id, "deletion requested");
    state.lifecycle.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "Directory users sorted by name", body = [DirectoryUser]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminListUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<DirectoryUser>>> {
    session.require_admin()?;
    Ok(web::Json(state.users.list_users().await?))
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
