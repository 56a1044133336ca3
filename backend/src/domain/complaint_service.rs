//! Complaint intake and lookup services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::complaint_service_support::{
    complaint_not_found, join_owner, join_owners, map_repository_error,
};
use crate::domain::ports::{ComplaintIntake, ComplaintQuery, ComplaintRepository, UserDirectory};
use crate::domain::{
    Complaint, ComplaintDraft, ComplaintFilter, ComplaintId, ComplaintSearch, ComplaintView, Error,
};

/// Files new complaints on behalf of their owners.
#[derive(Clone)]
pub struct ComplaintIntakeService<R, U> {
    complaints: Arc<R>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<R, U> ComplaintIntakeService<R, U> {
    pub fn new(complaints: Arc<R>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            complaints,
            users,
            clock,
        }
    }
}

#[async_trait]
impl<R, U> ComplaintIntake for ComplaintIntakeService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn file_complaint(&self, draft: ComplaintDraft) -> Result<ComplaintView, Error> {
        let complaint = Complaint::file(ComplaintId::random(), draft, self.clock.utc())
            .map_err(|err| {
                Error::invalid_request(err.to_string())
                    .with_details(json!({ "field": err.field() }))
            })?;
        self.complaints
            .insert(&complaint)
            .await
            .map_err(map_repository_error)?;
        info!(
            complaint_id = %complaint.id(),
            category = %complaint.category(),
            priority = %complaint.priority(),
            "complaint filed"
        );
        join_owner(self.users.as_ref(), &complaint).await
    }
}

/// Reads complaints joined with owner identity.
#[derive(Clone)]
pub struct ComplaintQueryService<R, U> {
    complaints: Arc<R>,
    users: Arc<U>,
}

impl<R, U> ComplaintQueryService<R, U> {
    pub fn new(complaints: Arc<R>, users: Arc<U>) -> Self {
        Self { complaints, users }
    }
}

#[async_trait]
impl<R, U> ComplaintQuery for ComplaintQueryService<R, U>
where
    R: ComplaintRepository,
    U: UserDirectory,
{
    async fn get_complaint(&self, complaint_id: ComplaintId) -> Result<ComplaintView, Error> {
        let complaint = self
            .complaints
            .find_by_id(&complaint_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| complaint_not_found(complaint_id))?;
        join_owner(self.users.as_ref(), &complaint).await
    }

    async fn list_complaints(&self, filter: ComplaintFilter) -> Result<Vec<ComplaintView>, Error> {
        let complaints = self
            .complaints
            .find(&ComplaintSearch::matching(filter))
            .await
            .map_err(map_repository_error)?;
        join_owners(self.users.as_ref(), &complaints).await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for intake and lookup.

    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockComplaintRepository, MockUserDirectory};
    use crate::domain::{
        ComplaintCategory, ComplaintPriority, ComplaintStatus, ErrorCode, UserId,
    };
    use crate::test_support::{ComplaintBuilder, MutableClock, day, directory_user};

    fn draft(user: UserId, title: &str) -> ComplaintDraft {
        ComplaintDraft {
            user,
            title: title.to_owned(),
            description: "The technician never arrived".to_owned(),
            category: ComplaintCategory::Service,
            priority: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn filing_stores_pending_complaint() {
        let owner = directory_user(UserId::random(), "Olive");
        let mut repo = MockComplaintRepository::new();
        repo.expect_insert()
            .times(1)
            .withf(|c| c.status() == ComplaintStatus::Pending && c.revision() == 1)
            .returning(|_| Ok(()));
        let mut users = MockUserDirectory::new();
        let known = owner.clone();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(known.clone())));
        let service = ComplaintIntakeService::new(
            Arc::new(repo),
            Arc::new(users),
            Arc::new(MutableClock::new(day(4, 2))),
        );

        let view = service
            .file_complaint(draft(owner.id, "Missed appointment"))
            .await
            .expect("filing succeeds");

        assert_eq!(view.priority, ComplaintPriority::Medium);
        assert_eq!(view.created_at, day(4, 2));
        assert_eq!(view.user.email, "olive@example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn filing_rejects_short_title_before_storage() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_insert().never();
        let service = ComplaintIntakeService::new(
            Arc::new(repo),
            Arc::new(MockUserDirectory::new()),
            Arc::new(MutableClock::new(day(4, 2))),
        );

        let err = service
            .file_complaint(draft(UserId::random(), " Bad "))
            .await
            .expect_err("short title");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
            Some("title")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn listing_joins_owners_and_tolerates_unknown_ones() {
        let known = directory_user(UserId::random(), "Olive");
        let stranger = UserId::random();
        let complaints = vec![
            ComplaintBuilder::new(known.id).filed_at(day(3, 2)).build(),
            ComplaintBuilder::new(stranger).filed_at(day(3, 1)).build(),
        ];
        let mut repo = MockComplaintRepository::new();
        repo.expect_find()
            .times(1)
            .withf(|search| {
                search.filter.status == Some(ComplaintStatus::Pending)
                    && search.limit.is_none()
            })
            .returning(move |_| Ok(complaints.clone()));
        let mut users = MockUserDirectory::new();
        let entry = known.clone();
        users
            .expect_find_by_ids()
            .times(1)
            .returning(move |_| Ok(vec![entry.clone()]));
        let service = ComplaintQueryService::new(Arc::new(repo), Arc::new(users));

        let views = service
            .list_complaints(ComplaintFilter::with_status(ComplaintStatus::Pending))
            .await
            .expect("listing succeeds");

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].user.name, "Olive");
        assert_eq!(views[1].user.id, stranger);
        assert!(views[1].user.name.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn get_unknown_complaint_is_not_found() {
        let mut repo = MockComplaintRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service =
            ComplaintQueryService::new(Arc::new(repo), Arc::new(MockUserDirectory::new()));

        let err = service
            .get_complaint(ComplaintId::random())
            .await
            .expect_err("missing complaint");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
