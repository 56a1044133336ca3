//! Pure reductions from a complaint slice to report rows.

use std::collections::{BTreeMap, BTreeSet};

use super::grouping::{
    Group, StatusTally, group_by, mean_days, percentage, resolution_days, top_n,
};
use super::report::{
    AssigneeStat, CategoryStat, DepartmentStat, FrequentIssue, OverallStats, PriorityStat,
    StatusShare, UserStat,
};
use crate::domain::{Complaint, ComplaintStatus, DirectoryUser, UserId};

pub fn category_stats(records: &[Complaint]) -> Vec<CategoryStat> {
    group_by(records, |c| Some(c.category()))
        .into_iter()
        .map(|(category, Group { tally, .. })| CategoryStat {
            category,
            count: tally.total,
            pending: tally.pending,
            in_progress: tally.in_progress,
            resolved: tally.resolved,
        })
        .collect()
}

/// Unassigned complaints are not counted.
pub fn department_stats(records: &[Complaint]) -> Vec<DepartmentStat> {
    group_by(records, Complaint::department)
        .into_iter()
        .map(|(department, Group { tally, .. })| DepartmentStat {
            department,
            total: tally.total,
            pending: tally.pending,
            in_progress: tally.in_progress,
            resolved: tally.resolved,
            closed: tally.closed,
        })
        .collect()
}

pub fn priority_stats(records: &[Complaint]) -> Vec<PriorityStat> {
    group_by(records, |c| Some(c.priority()))
        .into_iter()
        .map(|(priority, Group { tally, .. })| PriorityStat {
            priority,
            count: tally.total,
            pending: tally.pending,
            in_progress: tally.in_progress,
            resolved: tally.resolved,
        })
        .collect()
}

/// One row per status, including empty ones, so an empty corpus reports
/// four zero shares.
pub fn status_breakdown(records: &[Complaint]) -> Vec<StatusShare> {
    let tally = StatusTally::of(records);
    ComplaintStatus::ALL
        .iter()
        .map(|&status| {
            let count = tally.get(status);
            StatusShare {
                status,
                count,
                percentage: percentage(count, tally.total),
            }
        })
        .collect()
}

/// Owners missing from `directory` report an empty name and email.
pub fn user_stats(
    records: &[Complaint],
    directory: &BTreeMap<UserId, DirectoryUser>,
    limit: usize,
) -> Vec<UserStat> {
    let groups = group_by(records, |c| Some(c.user()));
    top_n(groups, limit, |g| g.tally.total)
        .into_iter()
        .map(|(user_id, Group { tally, .. })| {
            let (name, email) = directory
                .get(&user_id)
                .map(|u| (u.name.clone(), u.email.clone()))
                .unwrap_or_default();
            UserStat {
                user_id,
                name,
                email,
                total_complaints: tally.total,
                pending: tally.pending,
                resolved: tally.resolved,
            }
        })
        .collect()
}

/// Distinct owners of `records`, for a directory lookup.
pub fn owners(records: &[Complaint]) -> Vec<UserId> {
    records
        .iter()
        .map(Complaint::user)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn assignee_stats(records: &[Complaint], limit: usize) -> Vec<AssigneeStat> {
    let groups = group_by(records, Complaint::staff_name);
    top_n(groups, limit, |g| g.tally.total)
        .into_iter()
        .map(|(staff_name, Group { tally, members })| AssigneeStat {
            staff_name: staff_name.to_owned(),
            department: members
                .iter()
                .max_by_key(|c| c.assigned_at().unwrap_or_else(|| c.updated_at()))
                .and_then(|c| c.department()),
            total_assigned: tally.total,
            pending: tally.pending,
            in_progress: tally.in_progress,
            resolved: tally.resolved,
        })
        .collect()
}

pub fn frequent_issues(records: &[Complaint], limit: usize) -> Vec<FrequentIssue> {
    let groups = group_by(records, |c| Some(c.title()));
    top_n(groups, limit, |g| g.tally.total)
        .into_iter()
        .filter_map(|(title, Group { tally, members })| {
            let latest = members.iter().max_by_key(|c| c.created_at())?;
            Some(FrequentIssue {
                title: title.to_owned(),
                category: latest.category(),
                count: tally.total,
                avg_resolution_time: mean_days(&resolution_days(members.iter().copied())),
            })
        })
        .collect()
}

pub fn overall_stats(records: &[Complaint]) -> OverallStats {
    let tally = StatusTally::of(records);
    let total_users = u64::try_from(owners(records).len()).unwrap_or(u64::MAX);
    OverallStats {
        total_complaints: tally.total,
        total_users,
        resolution_rate: percentage(tally.resolutions(), tally.total),
        avg_resolution_days: mean_days(&resolution_days(records)).unwrap_or(0.0),
    }
}
