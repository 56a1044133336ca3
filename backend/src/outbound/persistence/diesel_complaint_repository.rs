//! PostgreSQL-backed `ComplaintRepository` using Diesel.
//!
//! Updates are compare-and-swap on `revision`: the `UPDATE` filters on the
//! expected value and a zero row count is disambiguated by a follow-up read
//! into `RevisionMismatch` or `Missing`.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{
    Assignment, Complaint, ComplaintFilter, ComplaintId, ComplaintSearch, ComplaintSnapshot, UserId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ComplaintChangeset, ComplaintRow, NewComplaintRow};
use super::pool::DbPool;
use super::schema::complaints;

#[derive(Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode<T>(column: &str, raw: &str) -> Result<T, ComplaintRepositoryError>
where
    T: std::str::FromStr<Err = crate::domain::ParseEnumError>,
{
    raw.parse().map_err(|err| {
        warn!(column, value = raw, "unrecognised enum value in complaints table");
        ComplaintRepositoryError::query(format!("corrupt {column} column: {err}"))
    })
}

#[expect(
    clippy::cast_sign_loss,
    reason = "a check constraint keeps revision positive"
)]
fn revision_from_db(revision: i32) -> u32 {
    revision as u32
}

fn revision_for_db(revision: u32) -> Result<i32, ComplaintRepositoryError> {
    i32::try_from(revision)
        .map_err(|_| ComplaintRepositoryError::query("revision exceeds column range"))
}

fn row_to_complaint(row: ComplaintRow) -> Result<Complaint, ComplaintRepositoryError> {
    let department = row
        .assigned_department
        .as_deref()
        .map(|raw| decode("assigned_department", raw))
        .transpose()?;
    let assigned_to = (department.is_some() || row.assigned_staff_name.is_some()).then(|| {
        Assignment {
            department,
            staff_name: row.assigned_staff_name,
            assigned_at: row.assigned_at,
        }
    });

    Ok(Complaint::restore(ComplaintSnapshot {
        id: ComplaintId::from_uuid(row.id),
        user: UserId::from_uuid(row.user_id),
        title: row.title,
        description: row.description,
        category: decode("category", &row.category)?,
        priority: decode("priority", &row.priority)?,
        status: decode("status", &row.status)?,
        assigned_to,
        admin_response: row.admin_response,
        created_at: row.created_at,
        updated_at: row.updated_at,
        resolved_at: row.resolved_at,
        revision: revision_from_db(row.revision),
    }))
}

fn rows_to_complaints(rows: Vec<ComplaintRow>) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
    rows.into_iter().map(row_to_complaint).collect()
}

fn filtered(filter: &ComplaintFilter) -> complaints::BoxedQuery<'static, Pg> {
    let mut query = complaints::table.into_boxed();
    if let Some(status) = filter.status {
        query = query.filter(complaints::status.eq(status.as_str()));
    }
    if let Some(category) = filter.category {
        query = query.filter(complaints::category.eq(category.as_str()));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(complaints::priority.eq(priority.as_str()));
    }
    if let Some(user) = filter.user {
        query = query.filter(complaints::user_id.eq(*user.as_uuid()));
    }
    if let Some(department) = filter.department {
        query = query.filter(complaints::assigned_department.eq(department.as_str()));
    }
    query
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn find_by_id(
        &self,
        id: &ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ComplaintRow> = complaints::table
            .find(*id.as_uuid())
            .select(ComplaintRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_complaint).transpose()
    }

    async fn find(
        &self,
        search: &ComplaintSearch,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = filtered(&search.filter)
            .select(ComplaintRow::as_select())
            .order((complaints::created_at.desc(), complaints::id.asc()));
        if let Some(limit) = search.limit {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            query = query.limit(limit);
        }
        let rows: Vec<ComplaintRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        debug!(rows = rows.len(), "complaints loaded");
        rows_to_complaints(rows)
    }

    async fn count(&self, filter: &ComplaintFilter) -> Result<u64, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewComplaintRow {
            id: *complaint.id().as_uuid(),
            user_id: *complaint.user().as_uuid(),
            title: complaint.title(),
            description: complaint.description(),
            category: complaint.category().as_str(),
            priority: complaint.priority().as_str(),
            status: complaint.status().as_str(),
            assigned_department: complaint.department().map(|d| d.as_str()),
            assigned_staff_name: complaint.staff_name(),
            assigned_at: complaint.assigned_at(),
            admin_response: complaint.admin_response(),
            created_at: complaint.created_at(),
            updated_at: complaint.updated_at(),
            resolved_at: complaint.resolved_at(),
            revision: revision_for_db(complaint.revision())?,
        };
        diesel::insert_into(complaints::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        complaint: &Complaint,
        expected_revision: u32,
    ) -> Result<(), ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = *complaint.id().as_uuid();
        let changes = ComplaintChangeset {
            status: complaint.status().as_str(),
            assigned_department: complaint.department().map(|d| d.as_str()),
            assigned_staff_name: complaint.staff_name(),
            assigned_at: complaint.assigned_at(),
            admin_response: complaint.admin_response(),
            updated_at: complaint.updated_at(),
            resolved_at: complaint.resolved_at(),
            revision: revision_for_db(complaint.revision())?,
        };

        let updated = diesel::update(complaints::table)
            .filter(
                complaints::id
                    .eq(id)
                    .and(complaints::revision.eq(revision_for_db(expected_revision)?)),
            )
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated > 0 {
            return Ok(());
        }

        let current: Option<i32> = complaints::table
            .find(id)
            .select(complaints::revision)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Err(match current {
            Some(actual) => ComplaintRepositoryError::revision_mismatch(
                expected_revision,
                revision_from_db(actual),
            ),
            None => ComplaintRepositoryError::missing(complaint.id()),
        })
    }

    async fn delete(&self, id: &ComplaintId) -> Result<(), ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(complaints::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if removed == 0 {
            return Err(ComplaintRepositoryError::missing(*id));
        }
        debug!(complaint_id = %id, "complaint row deleted");
        Ok(())
    }
}
