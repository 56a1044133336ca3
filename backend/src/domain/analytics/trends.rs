//! Calendar-bucketed views.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

use super::grouping::{Group, group_by};
use super::report::{MonthlyTrend, WeeklyTrend};
use crate::domain::Complaint;

/// Complaints filed in `year`, one row per month that has any.
pub fn monthly_trends(records: &[Complaint], year: i32) -> Vec<MonthlyTrend> {
    group_by(records, |c| {
        let created = c.created_at();
        (created.year() == year).then_some(created.month())
    })
    .into_iter()
    .map(|(month, Group { tally, .. })| MonthlyTrend {
        year,
        month,
        count: tally.total,
        pending: tally.pending,
        in_progress: tally.in_progress,
        resolved: tally.resolved,
    })
    .collect()
}

/// Monday opening the earliest of the `week_count` ISO weeks ending with the
/// week containing `now`.
///
/// Windows reaching past the representable calendar start at its first day.
fn window_start(now: DateTime<Utc>, week_count: u32) -> Option<NaiveDate> {
    let today = now.date_naive();
    let this_monday =
        today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let back = week_count.checked_sub(1)?;
    Some(
        Duration::try_weeks(i64::from(back))
            .and_then(|span| this_monday.checked_sub_signed(span))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Complaints filed in the trailing `week_count` ISO weeks up to `now`, one
/// row per week that has any.
pub fn weekly_trends(
    records: &[Complaint],
    now: DateTime<Utc>,
    week_count: u32,
) -> Vec<WeeklyTrend> {
    let Some(start) = window_start(now, week_count) else {
        return Vec::new();
    };
    group_by(records, |c| {
        let day = c.created_at().date_naive();
        if day < start || c.created_at() > now {
            return None;
        }
        let week = day.iso_week();
        Some((week.year(), week.week()))
    })
    .into_iter()
    .filter_map(|((year, week), Group { tally, .. })| {
        Some(WeeklyTrend {
            year,
            week,
            week_start: NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?,
            count: tally.total,
            pending: tally.pending,
            in_progress: tally.in_progress,
            resolved: tally.resolved,
        })
    })
    .collect()
}
