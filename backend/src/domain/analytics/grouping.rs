//! The single reduction every analytics view is built from.

use std::collections::BTreeMap;

use crate::domain::{Complaint, ComplaintStatus};

/// Count of complaints per status within one group.
///
/// ## Invariants
/// - `pending + in_progress + resolved + closed == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

impl StatusTally {
    /// Tally a whole slice.
    #[must_use]
    pub fn of<'a>(records: impl IntoIterator<Item = &'a Complaint>) -> Self {
        records.into_iter().fold(Self::default(), |mut tally, c| {
            tally.record(c.status());
            tally
        })
    }

    /// Count one more complaint in `status`.
    pub fn record(&mut self, status: ComplaintStatus) {
        self.total += 1;
        match status {
            ComplaintStatus::Pending => self.pending += 1,
            ComplaintStatus::InProgress => self.in_progress += 1,
            ComplaintStatus::Resolved => self.resolved += 1,
            ComplaintStatus::Closed => self.closed += 1,
        }
    }

    /// Count in one status.
    #[must_use]
    pub fn get(&self, status: ComplaintStatus) -> u64 {
        match status {
            ComplaintStatus::Pending => self.pending,
            ComplaintStatus::InProgress => self.in_progress,
            ComplaintStatus::Resolved => self.resolved,
            ComplaintStatus::Closed => self.closed,
        }
    }

    /// Complaints that reached Resolved or Closed.
    #[must_use]
    pub fn resolutions(&self) -> u64 {
        self.resolved + self.closed
    }
}

/// Members and tally of one group.
#[derive(Debug, Clone, Default)]
pub struct Group<'a> {
    pub tally: StatusTally,
    pub members: Vec<&'a Complaint>,
}

/// Partition `records` by `key_fn`, tallying statuses per group.
///
/// Records for which `key_fn` returns `None` are left out. Groups come back
/// in key order, which for the closed enums is their declaration order.
pub fn group_by<'a, K, F>(records: &'a [Complaint], mut key_fn: F) -> BTreeMap<K, Group<'a>>
where
    K: Ord,
    F: FnMut(&'a Complaint) -> Option<K>,
{
    let mut groups: BTreeMap<K, Group<'a>> = BTreeMap::new();
    for record in records {
        let Some(key) = key_fn(record) else {
            continue;
        };
        let group = groups.entry(key).or_default();
        group.tally.record(record.status());
        group.members.push(record);
    }
    groups
}

/// Keep the `n` largest groups by `weight`, ties broken by key ascending.
pub fn top_n<K, V, W>(groups: BTreeMap<K, V>, n: usize, weight: W) -> Vec<(K, V)>
where
    K: Ord,
    W: Fn(&V) -> u64,
{
    let mut ranked: Vec<(K, V)> = groups.into_iter().collect();
    // Stable sort keeps the BTreeMap's ascending key order among equal weights.
    ranked.sort_by(|(_, a), (_, b)| weight(b).cmp(&weight(a)));
    ranked.truncate(n);
    ranked
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[expect(
    clippy::cast_precision_loss,
    reason = "complaint counts stay far below 2^52"
)]
fn as_f64(count: u64) -> f64 {
    count as f64
}

/// `part` as a percentage of `whole`, two decimal places; 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(as_f64(part) * 100.0 / as_f64(whole))
}

/// Mean of `days`, two decimal places; `None` when empty.
#[must_use]
pub fn mean_days(days: &[f64]) -> Option<f64> {
    if days.is_empty() {
        return None;
    }
    let len = u64::try_from(days.len()).ok()?;
    Some(round2(days.iter().sum::<f64>() / as_f64(len)))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond spans stay far below 2^52"
)]
fn millis_to_days(millis: i64) -> f64 {
    const MILLIS_PER_DAY: f64 = 86_400_000.0;
    millis as f64 / MILLIS_PER_DAY
}

/// Days from filing to resolution, for complaints in Resolved or Closed.
pub fn resolution_days<'a>(records: impl IntoIterator<Item = &'a Complaint>) -> Vec<f64> {
    records
        .into_iter()
        .filter_map(Complaint::resolution_time)
        .map(|elapsed| millis_to_days(elapsed.num_milliseconds()))
        .collect()
}
