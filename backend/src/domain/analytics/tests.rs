//! Regression coverage for the analytics views.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, TimeDelta};
use rstest::rstest;

use super::grouping::{percentage, round2, top_n};
use super::*;
use crate::domain::ports::{MockComplaintRepository, MockUserDirectory};
use crate::domain::{ComplaintCategory, ComplaintPriority, ComplaintStatus, Department, UserId};
use crate::test_support::{ComplaintBuilder, MutableClock, day, directory_user};

fn mixed_corpus(user: UserId) -> Vec<Complaint> {
    vec![
        ComplaintBuilder::new(user)
            .category(ComplaintCategory::Billing)
            .build(),
        ComplaintBuilder::new(user)
            .category(ComplaintCategory::Service)
            .assigned(Department::Service, Some("Sam"))
            .build(),
        ComplaintBuilder::new(user)
            .category(ComplaintCategory::Billing)
            .priority(ComplaintPriority::High)
            .status(ComplaintStatus::Resolved, day(1, 7))
            .build(),
    ]
}

#[rstest]
fn empty_corpus_yields_empty_views() {
    assert!(views::category_stats(&[]).is_empty());
    assert!(views::department_stats(&[]).is_empty());
    assert!(views::frequent_issues(&[], 10).is_empty());
    assert!(trends::monthly_trends(&[], 2026).is_empty());
}

#[rstest]
fn empty_corpus_yields_zeroed_summaries() {
    let overall = views::overall_stats(&[]);
    assert_eq!(overall, OverallStats::default());

    let shares = views::status_breakdown(&[]);
    assert_eq!(shares.len(), ComplaintStatus::ALL.len());
    assert!(shares.iter().all(|s| s.count == 0 && s.percentage == 0.0));
}

#[rstest]
fn category_stats_follow_declaration_order() {
    let stats = views::category_stats(&mixed_corpus(UserId::random()));
    let order: Vec<_> = stats.iter().map(|s| s.category).collect();
    assert_eq!(
        order,
        vec![ComplaintCategory::Service, ComplaintCategory::Billing]
    );
    let billing = &stats[1];
    assert_eq!((billing.count, billing.pending, billing.resolved), (2, 1, 1));
}

#[rstest]
fn sub_counts_never_exceed_group_total() {
    let records = mixed_corpus(UserId::random());
    for stat in views::category_stats(&records) {
        assert!(stat.pending + stat.in_progress + stat.resolved <= stat.count);
    }
    for stat in views::priority_stats(&records) {
        assert!(stat.pending + stat.in_progress + stat.resolved <= stat.count);
    }
}

#[rstest]
fn department_stats_skip_unassigned() {
    let stats = views::department_stats(&mixed_corpus(UserId::random()));
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].department, Department::Service);
    assert_eq!((stats[0].total, stats[0].in_progress), (1, 1));
}

#[rstest]
fn status_shares_sum_to_one_hundred() {
    let user = UserId::random();
    let mut records = mixed_corpus(user);
    records.push(
        ComplaintBuilder::new(user)
            .status(ComplaintStatus::Closed, day(1, 9))
            .build(),
    );
    records.push(ComplaintBuilder::new(user).build());
    records.push(ComplaintBuilder::new(user).build());

    let shares = views::status_breakdown(&records);
    let sum: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() <= 0.05, "sum was {sum}");
    assert_eq!(shares[0].status, ComplaintStatus::Pending);
    assert_eq!(shares[0].percentage, 50.0);
}

#[rstest]
fn overall_stats_without_resolutions_are_zero() {
    let user = UserId::random();
    let records = vec![ComplaintBuilder::new(user).build()];
    let overall = views::overall_stats(&records);
    assert_eq!(overall.total_complaints, 1);
    assert_eq!(overall.total_users, 1);
    assert_eq!(overall.resolution_rate, 0.0);
    assert_eq!(overall.avg_resolution_days, 0.0);
}

#[rstest]
fn assign_then_resolve_scenario_reports_full_resolution() {
    let mut complaint = ComplaintBuilder::new(UserId::random())
        .filed_at(day(3, 1))
        .build();
    complaint.assign(Department::Technical, None, day(3, 2));
    assert_eq!(complaint.status(), ComplaintStatus::InProgress);
    complaint.assign(Department::Technical, Some("Sam".to_owned()), day(3, 3));
    assert_eq!(complaint.staff_name(), Some("Sam"));
    complaint.set_status(ComplaintStatus::Resolved, day(3, 4) + TimeDelta::hours(12));

    let overall = views::overall_stats(std::slice::from_ref(&complaint));
    assert_eq!(overall.resolution_rate, 100.0);
    assert_eq!(overall.avg_resolution_days, 3.5);
}

#[rstest]
fn ranked_views_break_ties_by_key() {
    let ranked = top_n(
        BTreeMap::from([("b", 2_u64), ("a", 2), ("c", 5), ("d", 1)]),
        3,
        |weight| *weight,
    );
    let keys: Vec<_> = ranked.into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[rstest]
fn user_stats_rank_owners_and_blank_unknown_ones() {
    let known = directory_user(UserId::random(), "Olive");
    let stranger = UserId::random();
    let mut records = mixed_corpus(known.id);
    records.push(ComplaintBuilder::new(stranger).build());
    let directory = BTreeMap::from([(known.id, known.clone())]);

    let stats = views::user_stats(&records, &directory, 10);

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].name, "Olive");
    assert_eq!((stats[0].total_complaints, stats[0].resolved), (3, 1));
    assert_eq!(stats[1].user_id, stranger);
    assert!(stats[1].name.is_empty() && stats[1].email.is_empty());
}

#[rstest]
fn assignee_stats_use_department_of_latest_assignment() {
    let user = UserId::random();
    let records = vec![
        ComplaintBuilder::new(user)
            .filed_at(day(1, 2))
            .assigned(Department::Billing, Some("Sam"))
            .build(),
        ComplaintBuilder::new(user)
            .filed_at(day(1, 9))
            .assigned(Department::Delivery, Some("Sam"))
            .status(ComplaintStatus::Resolved, day(1, 10))
            .build(),
        ComplaintBuilder::new(user)
            .assigned(Department::Staff, None)
            .build(),
    ];

    let stats = views::assignee_stats(&records, 10);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].staff_name, "Sam");
    assert_eq!(stats[0].department, Some(Department::Delivery));
    assert_eq!(
        (stats[0].total_assigned, stats[0].in_progress, stats[0].resolved),
        (2, 1, 1)
    );
}

#[rstest]
fn assignee_department_ignores_later_status_changes() {
    let user = UserId::random();
    let records = vec![
        ComplaintBuilder::new(user)
            .filed_at(day(1, 2))
            .assigned(Department::Billing, Some("Alice"))
            .status(ComplaintStatus::Resolved, day(1, 4))
            .build(),
        ComplaintBuilder::new(user)
            .filed_at(day(1, 3))
            .assigned(Department::Technical, Some("Alice"))
            .build(),
    ];

    let stats = views::assignee_stats(&records, 10);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].department, Some(Department::Technical));
}

#[rstest]
fn frequent_issues_average_only_resolved_records() {
    let user = UserId::random();
    let records = vec![
        ComplaintBuilder::new(user)
            .title("Late delivery")
            .filed_at(day(2, 1))
            .status(ComplaintStatus::Resolved, day(2, 3))
            .build(),
        ComplaintBuilder::new(user)
            .title("Late delivery")
            .filed_at(day(2, 4))
            .status(ComplaintStatus::Closed, day(2, 5))
            .build(),
        ComplaintBuilder::new(user)
            .title("Late delivery")
            .category(ComplaintCategory::Service)
            .filed_at(day(2, 6))
            .build(),
        ComplaintBuilder::new(user).title("late delivery").build(),
    ];

    let issues = views::frequent_issues(&records, 10);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].title, "Late delivery");
    assert_eq!(issues[0].count, 3);
    assert_eq!(issues[0].category, ComplaintCategory::Service);
    assert_eq!(issues[0].avg_resolution_time, Some(1.5));
    assert_eq!(issues[1].avg_resolution_time, None);
}

#[rstest]
fn monthly_trends_keep_requested_year_in_order() {
    let user = UserId::random();
    let records = vec![
        ComplaintBuilder::new(user).filed_at(day(3, 4)).build(),
        ComplaintBuilder::new(user).filed_at(day(1, 4)).build(),
        ComplaintBuilder::new(user).filed_at(day(3, 9)).build(),
        ComplaintBuilder::new(user)
            .filed_at(day(3, 9) - Duration::days(365))
            .build(),
    ];

    let months: Vec<_> = trends::monthly_trends(&records, 2026)
        .into_iter()
        .map(|t| (t.month, t.count))
        .collect();
    assert_eq!(months, vec![(1, 1), (3, 2)]);
}

#[rstest]
fn weekly_trends_cover_trailing_window() {
    let user = UserId::random();
    // 2026-03-18 is a Wednesday in ISO week 12.
    let now = day(3, 18);
    let records = vec![
        ComplaintBuilder::new(user).filed_at(day(3, 16)).build(),
        ComplaintBuilder::new(user).filed_at(day(3, 15)).build(),
        ComplaintBuilder::new(user).filed_at(day(3, 9)).build(),
        ComplaintBuilder::new(user).filed_at(day(3, 8)).build(),
    ];

    let weeks = trends::weekly_trends(&records, now, 2);

    let summary: Vec<_> = weeks.iter().map(|w| (w.week, w.count)).collect();
    assert_eq!(summary, vec![(11, 2), (12, 1)]);
    assert_eq!(weeks[0].week_start, day(3, 9).date_naive());
    assert!(trends::weekly_trends(&records, now, 0).is_empty());
}

#[rstest]
fn oversized_week_window_covers_whole_history_up_to_now() {
    let user = UserId::random();
    let now = day(3, 18);
    let records = vec![
        ComplaintBuilder::new(user)
            .filed_at(day(3, 16) - Duration::days(365 * 40))
            .build(),
        ComplaintBuilder::new(user).filed_at(day(3, 16)).build(),
        ComplaintBuilder::new(user).filed_at(day(3, 25)).build(),
    ];

    let weeks = trends::weekly_trends(&records, now, 20_000_000);

    let total: u64 = weeks.iter().map(|w| w.count).sum();
    assert_eq!(weeks.len(), 2);
    assert_eq!(total, 2);
}

#[rstest]
#[case(1, 3, 33.33)]
#[case(2, 3, 66.67)]
#[case(0, 0, 0.0)]
fn percentages_round_to_two_places(#[case] part: u64, #[case] whole: u64, #[case] expected: f64) {
    assert_eq!(percentage(part, whole), expected);
}

#[rstest]
#[case(2.344, 2.34)]
#[case(2.346, 2.35)]
#[case(-1.236, -1.24)]
fn round2_keeps_two_places(#[case] raw: f64, #[case] expected: f64) {
    assert_eq!(round2(raw), expected);
}

fn service_over(
    records: Vec<Complaint>,
    users: MockUserDirectory,
) -> AnalyticsService<MockComplaintRepository, MockUserDirectory> {
    let mut repo = MockComplaintRepository::new();
    repo.expect_find().returning(move |search| {
        Ok(records
            .iter()
            .filter(|c| search.filter.matches(c))
            .cloned()
            .collect())
    });
    AnalyticsService::new(
        Arc::new(repo),
        Arc::new(users),
        Arc::new(MutableClock::new(day(6, 15))),
    )
}

#[rstest]
#[tokio::test]
async fn monthly_trends_default_to_current_year() {
    let user = UserId::random();
    let records = vec![ComplaintBuilder::new(user).filed_at(day(2, 2)).build()];
    let service = service_over(records, MockUserDirectory::new());

    let trends = service
        .monthly_trends(ComplaintFilter::default(), None)
        .await
        .expect("trends succeed");

    assert_eq!(trends.len(), 1);
    assert_eq!((trends[0].year, trends[0].month), (2026, 2));
}

#[rstest]
#[tokio::test]
async fn filters_apply_before_aggregation() {
    let records = mixed_corpus(UserId::random());
    let service = service_over(records, MockUserDirectory::new());
    let filter = ComplaintFilter {
        category: Some(ComplaintCategory::Billing),
        ..ComplaintFilter::default()
    };

    let overall = service
        .overall_stats(filter)
        .await
        .expect("overall succeeds");

    assert_eq!(overall.total_complaints, 2);
    assert_eq!(overall.resolution_rate, 50.0);
}

#[rstest]
#[tokio::test]
async fn user_stats_consult_directory_once() {
    let owner = directory_user(UserId::random(), "Olive");
    let mut users = MockUserDirectory::new();
    let entry = owner.clone();
    users
        .expect_find_by_ids()
        .times(1)
        .withf(|ids| ids.len() == 1)
        .returning(move |_| Ok(vec![entry.clone()]));
    let service = service_over(mixed_corpus(owner.id), users);

    let stats = service
        .user_stats(ComplaintFilter::default(), Some(1))
        .await
        .expect("user stats succeed");

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].email, "olive@example.com");
}
