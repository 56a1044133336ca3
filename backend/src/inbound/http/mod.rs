//! HTTP inbound adapter exposing the REST API.
//!
//! Handlers translate requests into calls on the driving ports held by
//! [`state::HttpState`]. They never touch storage directly.

pub mod admin;
pub mod analytics;
pub mod complaints;
pub mod error;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` route.
///
/// The admin and analytics scopes are nested ahead of the user routes so
/// their prefixes win the match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(error::json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(error::query_payload_error))
            .service(
                web::scope("/admin")
                    .service(admin::dashboard)
                    .service(admin::list_complaints)
                    .service(admin::get_complaint)
                    .service(admin::update_status)
                    .service(admin::assign)
                    .service(admin::respond)
                    .service(admin::delete_complaint)
                    .service(admin::list_users),
            )
            .service(
                web::scope("/analytics")
                    .service(analytics::overall_stats)
                    .service(analytics::category_stats)
                    .service(analytics::department_stats)
                    .service(analytics::priority_stats)
                    .service(analytics::status_breakdown)
                    .service(analytics::user_stats)
                    .service(analytics::assignee_stats)
                    .service(analytics::monthly_trends)
                    .service(analytics::weekly_trends)
                    .service(analytics::frequent_issues),
            )
            .service(complaints::file_complaint)
            .service(complaints::list_own_complaints)
            .service(complaints::get_own_complaint),
    );
}
