//! Handler tests for the admin routes.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::ports::{
    DashboardSnapshot, MockComplaintLifecycle, MockComplaintQuery, MockDashboardQuery,
    MockUsersQuery,
};
use crate::domain::{ComplaintId, ComplaintStatus, ComplaintView, Department, Error, UserId};
use crate::inbound::http::session::Role;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{call, login_cookie};
use crate::test_support::{ComplaintBuilder, directory_user, view_of};

#[fixture]
fn view() -> ComplaintView {
    view_of(&ComplaintBuilder::new(UserId::random()).build(), "Olive")
}

async fn as_admin(state: HttpState, request: test::TestRequest) -> (StatusCode, Value) {
    let cookie = login_cookie(UserId::random(), Role::Admin).await;
    let response = call(state, request.cookie(cookie)).await;
    let status = response.status();
    (status, test::read_body_json(response).await)
}

fn lifecycle_state(lifecycle: MockComplaintLifecycle) -> HttpState {
    HttpState {
        lifecycle: Arc::new(lifecycle),
        ..HttpState::default()
    }
}

#[rstest]
#[actix_web::test]
async fn dashboard_returns_snapshot(view: ComplaintView) {
    let mut dashboard = MockDashboardQuery::new();
    dashboard.expect_snapshot().return_once(move || {
        Ok(DashboardSnapshot {
            total: 3,
            pending: 1,
            in_progress: 1,
            resolved: 1,
            closed: 0,
            recent_complaints: vec![view],
        })
    });
    let state = HttpState {
        dashboard: Arc::new(dashboard),
        ..HttpState::default()
    };

    let (status, body) =
        as_admin(state, test::TestRequest::get().uri("/api/v1/admin/dashboard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inProgress"], 1);
    assert_eq!(body["recentComplaints"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn dashboard_rejects_plain_users() {
    let cookie = login_cookie(UserId::random(), Role::User).await;
    let response = call(
        HttpState::default(),
        test::TestRequest::get()
            .uri("/api/v1/admin/dashboard")
            .cookie(cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[rstest]
#[actix_web::test]
async fn listing_parses_filters(view: ComplaintView) {
    let mut query = MockComplaintQuery::new();
    query
        .expect_list_complaints()
        .withf(|filter| {
            filter.status == Some(ComplaintStatus::InProgress)
                && filter.department == Some(Department::Billing)
                && filter.user.is_none()
        })
        .times(1)
        .return_once(move |_| Ok(vec![view]));
    let state = HttpState {
        complaints: Arc::new(query),
        ..HttpState::default()
    };

    let (status, body) = as_admin(
        state,
        test::TestRequest::get()
            .uri("/api/v1/admin/complaints?status=In-Progress&department=Billing"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn status_update_forwards_parsed_status(view: ComplaintView) {
    let id = view.id;
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle
        .expect_update_status()
        .withf(move |complaint_id, status| {
            *complaint_id == id && *status == ComplaintStatus::Resolved
        })
        .times(1)
        .return_once(move |_, _| Ok(view));

    let (status, _) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::put()
            .uri(&format!("/api/v1/admin/complaints/{id}/status"))
            .set_json(json!({"status": "Resolved"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case(json!({}), "status")]
#[case(json!({"status": "Done"}), "status")]
#[actix_web::test]
async fn status_update_validates_body(#[case] body: Value, #[case] field: &str) {
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle.expect_update_status().never();

    let (status, payload) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::put()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/status")
            .set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn assign_requires_department() {
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle.expect_assign().never();

    let (status, payload) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::post()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/assign")
            .set_json(json!({"userId": "3fa85f64-5717-4562-b3fc-2c963f66afa7"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], "department");
    assert_eq!(payload["details"]["code"], "missing_field");
}

#[rstest]
#[actix_web::test]
async fn assign_forwards_department_and_staff(view: ComplaintView) {
    let staff = UserId::random();
    let id = view.id;
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle
        .expect_assign()
        .withf(move |request| {
            request.complaint_id == id
                && request.department == Department::Technical
                && request.staff_id == Some(staff)
        })
        .times(1)
        .return_once(move |_| Ok(view));

    let (status, _) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::post()
            .uri(&format!("/api/v1/admin/complaints/{id}/assign"))
            .set_json(json!({"department": "Technical", "userId": staff.to_string()})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn assign_surfaces_unknown_staff_as_not_found() {
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle
        .expect_assign()
        .return_once(|_| Err(Error::not_found("user not found")));

    let (status, payload) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::post()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/assign")
            .set_json(json!({
                "department": "Billing",
                "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa7",
            })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["message"], "user not found");
}

#[rstest]
#[actix_web::test]
async fn respond_requires_admin_response_field() {
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle.expect_respond().never();

    let (status, payload) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::post()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/respond")
            .set_json(json!({"response": "wrong key"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], "adminResponse");
}

#[rstest]
#[actix_web::test]
async fn respond_conflict_maps_to_409() {
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle
        .expect_respond()
        .withf(|_, text| text == "Refund issued")
        .return_once(|_, _| Err(Error::conflict("complaint changed concurrently")));

    let (status, _) = as_admin(
        lifecycle_state(lifecycle),
        test::TestRequest::post()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/respond")
            .set_json(json!({"adminResponse": "Refund issued"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_invalid_request() {
    let (status, payload) = as_admin(
        HttpState::default(),
        test::TestRequest::post()
            .uri("/api/v1/admin/complaints/3fa85f64-5717-4562-b3fc-2c963f66afa6/respond")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn users_are_listed_from_directory() {
    let mut users = MockUsersQuery::new();
    users.expect_list_users().return_once(|| {
        Ok(vec![
            directory_user(UserId::random(), "Ada"),
            directory_user(UserId::random(), "Zed"),
        ])
    });
    let state = HttpState {
        users: Arc::new(users),
        ..HttpState::default()
    };

    let (status, body) =
        as_admin(state, test::TestRequest::get().uri("/api/v1/admin/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Ada");
    assert_eq!(body[1]["email"], "zed@example.com");
}

#[rstest]
#[actix_web::test]
async fn directory_outage_is_service_unavailable() {
    let mut users = MockUsersQuery::new();
    users
        .expect_list_users()
        .return_once(|| Err(Error::service_unavailable("user directory unavailable")));
    let state = HttpState {
        users: Arc::new(users),
        ..HttpState::default()
    };

    let (status, _) =
        as_admin(state, test::TestRequest::get().uri("/api/v1/admin/users")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
#[actix_web::test]
async fn delete_forwards_to_lifecycle_and_returns_no_content() {
    let id = ComplaintId::random();
    let mut lifecycle = MockComplaintLifecycle::new();
    lifecycle
        .expect_delete()
        .times(1)
        .withf(move |requested| *requested == id)
        .return_once(|_| Ok(()));
    let cookie = login_cookie(UserId::random(), Role::Admin).await;

    let response = call(
        lifecycle_state(lifecycle),
        test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/complaints/{id}"))
            .cookie(cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[actix_web::test]
async fn deleting_unknown_complaint_is_not_found() {
    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/complaints/{}", ComplaintId::random()));

    let (status, body) = as_admin(HttpState::default(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn delete_requires_admin() {
    let cookie = login_cookie(UserId::random(), Role::User).await;

    let response = call(
        HttpState::default(),
        test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/complaints/{}", ComplaintId::random()))
            .cookie(cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
