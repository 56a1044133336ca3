//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{complaints, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = complaints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ComplaintRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub assigned_department: Option<String>,
    pub assigned_staff_name: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub revision: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaints)]
pub(crate) struct NewComplaintRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub priority: &'a str,
    pub status: &'a str,
    pub assigned_department: Option<&'a str>,
    pub assigned_staff_name: Option<&'a str>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub admin_response: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub revision: i32,
}

/// Mutable columns rewritten by a lifecycle update.
///
/// `treat_none_as_null` so clearing `resolved_at` reaches the database.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = complaints)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ComplaintChangeset<'a> {
    pub status: &'a str,
    pub assigned_department: Option<&'a str>,
    pub assigned_staff_name: Option<&'a str>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub admin_response: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub revision: i32,
}
