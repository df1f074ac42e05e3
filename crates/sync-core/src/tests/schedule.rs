use crate::schedule::{
    DEFAULT_WEEK_START, next_kickoff_after, parse_utc_offset, parse_week_start_day, sprint_window,
};

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Utc, Weekday};
use googletest::prelude::*;
use proptest::prelude::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn hours(h: i32) -> FixedOffset {
    FixedOffset::east_opt(h * 3600).unwrap()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

// =========================================================================
// Week-start parsing
// =========================================================================

#[test]
fn given_full_day_names_when_parsed_then_each_weekday_matches() {
    let cases = [
        ("monday", Weekday::Mon),
        ("Tuesday", Weekday::Tue),
        ("WEDNESDAY", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("Friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("Sunday", Weekday::Sun),
    ];

    for (token, expected) in cases {
        assert_that!(parse_week_start_day(token), eq(expected));
    }
}

#[test]
fn given_abbreviated_day_names_when_parsed_then_each_weekday_matches() {
    let cases = [
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("tues", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("THU", Weekday::Thu),
        ("thurs", Weekday::Thu),
        ("fri", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("sun", Weekday::Sun),
    ];

    for (token, expected) in cases {
        assert_that!(parse_week_start_day(token), eq(expected));
    }
}

#[test]
fn given_unknown_or_empty_token_when_parsed_then_defaults_to_sunday() {
    for token in ["", "  ", "funday", "m0nday", "1"] {
        assert_that!(parse_week_start_day(token), eq(DEFAULT_WEEK_START));
        assert_that!(parse_week_start_day(token), eq(Weekday::Sun));
    }
}

// =========================================================================
// UTC-offset parsing
// =========================================================================

#[test]
fn given_signed_offset_tokens_when_parsed_then_exact_hour_offset() {
    let cases = [
        ("GMT+2", 2),
        ("UTC+2", 2),
        ("gmt-5", -5),
        ("utc+0", 0),
        ("GMT-11", -11),
        ("UTC+14", 14),
    ];

    for (token, h) in cases {
        assert_that!(parse_utc_offset(token), eq(hours(h)));
    }
}

#[test]
fn given_bare_gmt_or_utc_when_parsed_then_zero_offset() {
    assert_that!(parse_utc_offset("GMT"), eq(hours(0)));
    assert_that!(parse_utc_offset("utc"), eq(hours(0)));
}

#[test]
fn given_malformed_offset_token_when_parsed_then_defaults_to_plus_two() {
    for token in ["", "EST", "GMT+2:30", "UTC+", "GMT+abc", "+2", "GMT+30", "UTC-25"] {
        assert_that!(parse_utc_offset(token), eq(hours(2)));
    }
}

// =========================================================================
// Kickoff instant
// =========================================================================

#[test]
fn given_midweek_now_when_kickoff_computed_then_next_week_start_at_ten_local() {
    // Given: Wednesday 14:00 local (+2), week starts Monday
    let now = instant("2026-03-04T12:00:00Z");

    // When
    let kickoff = next_kickoff_after(now, Weekday::Mon, hours(2));

    // Then: Monday 2026-03-09 10:00 local == 08:00 UTC
    assert_that!(kickoff, eq(instant("2026-03-09T08:00:00Z")));
}

#[test]
fn given_target_day_before_ten_local_when_kickoff_computed_then_same_day() {
    // Given: Monday 08:00 local (+2)
    let now = instant("2026-03-02T06:00:00Z");

    // When
    let kickoff = next_kickoff_after(now, Weekday::Mon, hours(2));

    // Then: today at 10:00 local
    assert_that!(kickoff, eq(instant("2026-03-02T08:00:00Z")));
}

#[test]
fn given_target_day_past_ten_local_when_kickoff_computed_then_rolls_a_full_week() {
    // Given: Monday 10:00 local (+2) exactly
    let now = instant("2026-03-02T08:00:00Z");

    // When
    let kickoff = next_kickoff_after(now, Weekday::Mon, hours(2));

    // Then: the following Monday
    assert_that!(kickoff, eq(instant("2026-03-09T08:00:00Z")));
}

#[test]
fn given_negative_offset_when_kickoff_computed_then_local_day_boundary_respected() {
    // Given: 01:00 UTC Tuesday is still Monday 20:00 at -5
    let now = instant("2026-03-03T01:00:00Z");

    // When
    let kickoff = next_kickoff_after(now, Weekday::Mon, hours(-5));

    // Then: next Monday 10:00 local == 15:00 UTC (Monday 20:00 is past 10:00)
    assert_that!(kickoff, eq(instant("2026-03-09T15:00:00Z")));
}

// =========================================================================
// Sprint windows
// =========================================================================

#[test]
fn given_project_start_midweek_when_window_computed_then_first_block_on_next_week_start() {
    // Given: project starts Wednesday 2026-03-04 local (+2), weeks start Monday
    let project_start = instant("2026-03-04T10:00:00Z");

    // When
    let (start, due) = sprint_window(1, project_start, Weekday::Mon, hours(2));

    // Then: block runs Monday 2026-03-09 00:00 local .. Sunday 2026-03-15 23:59:59.9999999 local
    assert_that!(start, eq(instant("2026-03-08T22:00:00Z")));
    assert_that!(due, eq(instant("2026-03-15T21:59:59.9999999Z")));
}

#[test]
fn given_project_start_on_week_start_day_when_window_computed_then_block_starts_same_day() {
    // Given: project starts Monday 2026-03-02 local (+2)
    let project_start = instant("2026-03-02T07:00:00Z");

    // When
    let (start, _) = sprint_window(1, project_start, Weekday::Mon, hours(2));

    // Then: local midnight of that same Monday
    assert_that!(start, eq(instant("2026-03-01T22:00:00Z")));
}

#[test]
fn given_sprint_two_when_window_computed_then_one_week_after_sprint_one() {
    let project_start = instant("2026-03-04T10:00:00Z");

    let (start1, due1) = sprint_window(1, project_start, Weekday::Mon, hours(2));
    let (start2, due2) = sprint_window(2, project_start, Weekday::Mon, hours(2));

    assert_that!(start2 - start1, eq(Duration::days(7)));
    assert_that!(due2 - due1, eq(Duration::days(7)));
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn given_consecutive_sprints_then_starts_are_exactly_seven_days_apart(
        n in 1u32..200,
        ts in 1_500_000_000i64..2_000_000_000,
        day_idx in 0usize..7,
        offset_hours in -12i32..=14,
    ) {
        let project_start = DateTime::from_timestamp(ts, 0).unwrap();
        let week_start = WEEKDAYS[day_idx];
        let offset = hours(offset_hours);

        let (start_n, due_n) = sprint_window(n, project_start, week_start, offset);
        let (start_next, _) = sprint_window(n + 1, project_start, week_start, offset);

        prop_assert_eq!(start_next - start_n, Duration::days(7));
        prop_assert_eq!(due_n - start_n, Duration::days(7) - Duration::nanoseconds(100));
    }

    #[test]
    fn given_any_now_then_kickoff_is_future_and_on_week_start_at_ten(
        ts in 1_500_000_000i64..2_000_000_000,
        day_idx in 0usize..7,
        offset_hours in -12i32..=14,
    ) {
        let now = DateTime::from_timestamp(ts, 0).unwrap();
        let week_start = WEEKDAYS[day_idx];
        let offset = hours(offset_hours);

        let kickoff = next_kickoff_after(now, week_start, offset);
        let local = kickoff.with_timezone(&offset);

        prop_assert!(kickoff > now);
        prop_assert!(kickoff - now <= Duration::days(7));
        prop_assert_eq!(local.weekday(), week_start);
        prop_assert_eq!((local.hour(), local.minute(), local.second()), (10, 0, 0));
    }
}
