//! Shared helpers for unit tests: a settable clock and complaint builders.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    Complaint, ComplaintCategory, ComplaintDraft, ComplaintId, ComplaintPriority, ComplaintStatus,
    ComplaintView, DirectoryUser, Department, UserId,
};

/// Clock whose reading only moves when a test says so.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Midnight UTC on the given 2026 date.
pub fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Fluent builder for complaints in arbitrary lifecycle states.
pub struct ComplaintBuilder {
    user: UserId,
    title: String,
    category: ComplaintCategory,
    priority: ComplaintPriority,
    filed_at: DateTime<Utc>,
    status: Option<(ComplaintStatus, DateTime<Utc>)>,
    department: Option<Department>,
    staff_name: Option<String>,
}

impl ComplaintBuilder {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            title: "Parcel arrived damaged".to_owned(),
            category: ComplaintCategory::Delivery,
            priority: ComplaintPriority::Medium,
            filed_at: day(1, 5),
            status: None,
            department: None,
            staff_name: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.title);
        self
    }

    pub fn category(mut self, category: ComplaintCategory) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: ComplaintPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn filed_at(mut self, at: DateTime<Utc>) -> Self {
        self.filed_at = at;
        self
    }

    pub fn status(mut self, status: ComplaintStatus, at: DateTime<Utc>) -> Self {
        self.status = Some((status, at));
        self
    }

    pub fn assigned(mut self, department: Department, staff_name: Option<&str>) -> Self {
        self.department = Some(department);
        self.staff_name = staff_name.map(str::to_owned);
        self
    }

    pub fn build(self) -> Complaint {
        let mut complaint = Complaint::file(
            ComplaintId::random(),
            ComplaintDraft {
                user: self.user,
                title: self.title,
                description: "Details long enough to pass intake".to_owned(),
                category: self.category,
                priority: Some(self.priority),
            },
            self.filed_at,
        )
        .expect("builder produces a valid draft");
        if let Some(department) = self.department {
            complaint.assign(department, self.staff_name, self.filed_at);
        }
        if let Some((status, at)) = self.status {
            complaint.set_status(status, at);
        }
        complaint
    }
}

/// Directory entry with a name and derived email.
pub fn directory_user(id: UserId, name: &str) -> DirectoryUser {
    DirectoryUser {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
    }
}

/// View of `complaint` joined with a directory owner called `owner_name`.
pub fn view_of(complaint: &Complaint, owner_name: &str) -> ComplaintView {
    ComplaintView::new(complaint, directory_user(complaint.user(), owner_name).into())
}
