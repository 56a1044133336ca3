//! Driving port for the admin dashboard snapshot.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ComplaintView, Error};

/// Number of recent complaints included in a snapshot.
pub const RECENT_COMPLAINTS: usize = 5;

/// Status counters plus the most recently filed complaints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
    pub recent_complaints: Vec<ComplaintView>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn snapshot(&self) -> Result<DashboardSnapshot, Error>;
}

/// Fixture dashboard over an empty corpus.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDashboardQuery;

#[async_trait]
impl DashboardQuery for FixtureDashboardQuery {
    async fn snapshot(&self) -> Result<DashboardSnapshot, Error> {
        Ok(DashboardSnapshot::default())
    }
}
