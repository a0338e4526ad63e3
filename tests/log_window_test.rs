// ABOUTME: Integration tests for partitioning check-ins into today and history
// ABOUTME: Ordering, same-day duplicates, future records, and weekday pinning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Weekday};
use common::{assert_close, check_in, day, init_test_logging};
use zenwork::intelligence::{LogWindow, WellnessEngine, WellnessScoringConfig};

#[test]
fn test_partition_sorts_history_and_picks_today() {
    init_test_logging();
    let logs = vec![
        check_in(day(2025, 3, 10), 3, 5, 8.0, 8),
        check_in(day(2025, 3, 11), 4, 3, 7.0, 8),
        check_in(day(2025, 3, 8), 2, 7, 9.0, 8),
    ];

    let window = LogWindow::partition(logs, day(2025, 3, 11));
    assert_eq!(window.today.as_ref().unwrap().mood, 4);
    let dates: Vec<_> = window.history.iter().map(|log| log.calendar_date()).collect();
    assert_eq!(dates, vec![day(2025, 3, 8), day(2025, 3, 10)]);
}

#[test]
fn test_latest_same_day_check_in_wins() {
    let mut morning = check_in(day(2025, 3, 11), 2, 8, 8.0, 2);
    let mut evening = check_in(day(2025, 3, 11), 4, 3, 8.0, 9);
    morning.id = "morning".to_owned();
    evening.id = "evening".to_owned();
    evening.date += Duration::hours(9);

    let window = LogWindow::partition(vec![evening, morning], day(2025, 3, 11));
    assert_eq!(window.today.unwrap().id, "evening");
    assert!(window.history.is_empty());
}

#[test]
fn test_future_records_are_ignored() {
    let logs = vec![
        check_in(day(2025, 3, 10), 3, 5, 8.0, 8),
        check_in(day(2025, 3, 12), 1, 10, 14.0, 0),
    ];
    let window = LogWindow::partition(logs, day(2025, 3, 11));
    assert!(window.today.is_none());
    assert_eq!(window.history.len(), 1);
}

#[test]
fn test_window_request_uses_window_weekday() {
    // 2025-03-10 is a Monday
    let monday = day(2025, 3, 10);
    let logs = vec![
        check_in(day(2025, 3, 9), 3, 5, 8.0, 8),
        check_in(monday, 3, 5, 8.0, 8),
    ];
    let window = LogWindow::partition(logs, monday);

    let request = window.request(8);
    assert_eq!(request.weekday, Weekday::Mon);

    let metrics = WellnessEngine::new(WellnessScoringConfig::default())
        .calculate(&request)
        .unwrap();
    assert_close(metrics.recovery_score, 85.0);
}
