//! Complaint routes for signed-in users.
//!
//! ```text
//! POST /api/v1/complaints {"title":"Router keeps dropping","description":"...","category":"Technical"}
//! GET /api/v1/complaints
//! GET /api/v1/complaints/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{ComplaintDraft, ComplaintFilter, ComplaintView, Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_complaint_id, parse_enum, parse_optional_enum, require,
};

/// Body of `POST /api/v1/complaints`.
///
/// Fields are optional at the wire level so a missing field is reported
/// with its name instead of a generic parse failure.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileComplaintRequest {
    #[schema(example = "Router keeps dropping")]
    pub title: Option<String>,
    #[schema(example = "The connection drops every evening around eight")]
    pub description: Option<String>,
    #[schema(example = "Technical")]
    pub category: Option<String>,
    #[schema(example = "High")]
    pub priority: Option<String>,
}

impl FileComplaintRequest {
    fn into_draft(self, user: UserId) -> Result<ComplaintDraft, Error> {
        let title = require(self.title, FieldName::new("title"))?;
        let description = require(self.description, FieldName::new("description"))?;
        let category = require(self.category, FieldName::new("category"))?;
        Ok(ComplaintDraft {
            user,
            title,
            description,
            category: parse_enum(&category, FieldName::new("category"))?,
            priority: parse_optional_enum(self.priority.as_deref(), FieldName::new("priority"))?,
        })
    }
}

/// File a complaint as the signed-in user.
#[utoipa::path(
    post,
    path = "/api/v1/complaints",
    request_body = FileComplaintRequest,
    responses(
        (status = 201, description = "Complaint filed", body = ComplaintView),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "fileComplaint"
)]
#[post("/complaints")]
pub async fn file_complaint(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<FileComplaintRequest>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    let draft = payload.into_inner().into_draft(user)?;
    let view = state.intake.file_complaint(draft).await?;
    Ok(HttpResponse::Created().json(view))
}

/// The caller's own complaints, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/complaints",
    responses(
        (status = 200, description = "Own complaints", body = [ComplaintView]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "listOwnComplaints"
)]
#[get("/complaints")]
pub async fn list_own_complaints(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ComplaintView>>> {
    let user = session.require_user_id()?;
    let views = state
        .complaints
        .list_complaints(ComplaintFilter::for_user(user))
        .await?;
    Ok(web::Json(views))
}

/// One of the caller's own complaints.
#[utoipa::path(
    get,
    path = "/api/v1/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint", body = ComplaintView),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Owned by someone else", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "getOwnComplaint"
)]
#[get("/complaints/{id}")]
pub async fn get_own_complaint(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ComplaintView>> {
    let user = session.require_user_id()?;
    let id = parse_complaint_id(&path)?;
    let view = state.complaints.get_complaint(id).await?;
    if view.user.id != user {
        warn!(complaint_id = %id, "user attempted to read another user's complaint");
        return Err(Error::forbidden("complaint belongs to another user"));
    }
    Ok(web::Json(view))
}

#[cfg(test)]
#[path = "complaints_tests.rs"]
mod tests;
