//! Sprint window and kickoff date math.
//!
//! Everything here is pure: the configured week-start day, the fixed UTC
//! offset, and (where relevant) "now" are explicit inputs. Offsets are
//! constant whole hours with no daylight-saving adjustment, and a week is
//! always exactly 7 calendar days.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc, Weekday,
};

/// Fallback week start when the configured token is missing or unknown.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;
/// Fallback offset hours (+02:00) when the configured token is missing or
/// unknown.
pub const DEFAULT_OFFSET_HOURS: i32 = 2;

const KICKOFF_HOUR: u32 = 10;
const SPRINT_LENGTH_DAYS: i64 = 7;
const SECS_PER_HOUR: i32 = 3600;

/// Maps a case-insensitive day name or abbreviation to a weekday. Anything
/// unrecognized, including the empty string, falls back to Sunday.
pub fn parse_week_start_day(token: &str) -> Weekday {
    match token.trim().to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => DEFAULT_WEEK_START,
    }
}

/// Maps `GMT±H` / `UTC±H` tokens (and the bare forms `GMT`/`UTC`) to a
/// fixed whole-hour offset. Malformed input never errors; it falls back to
/// the default `+02:00`.
pub fn parse_utc_offset(token: &str) -> FixedOffset {
    let normalized = token.trim().to_uppercase();
    let Some(rest) = normalized
        .strip_prefix("GMT")
        .or_else(|| normalized.strip_prefix("UTC"))
    else {
        return default_offset();
    };

    if rest.is_empty() {
        return Utc.fix();
    }

    match rest.parse::<i32>() {
        Ok(hours) => whole_hour_offset(hours).unwrap_or_else(default_offset),
        Err(_) => default_offset(),
    }
}

/// The next wall-clock occurrence of `week_start` at local 10:00, as an
/// absolute instant. If the current local time is already at or past 10:00
/// on the target day, rolls forward a full week.
pub fn next_kickoff_instant(week_start: Weekday, offset: FixedOffset) -> DateTime<Utc> {
    next_kickoff_after(Utc::now(), week_start, offset)
}

/// Testable form of [`next_kickoff_instant`] with an explicit "now".
pub fn next_kickoff_after(
    now: DateTime<Utc>,
    week_start: Weekday,
    offset: FixedOffset,
) -> DateTime<Utc> {
    let local = now.with_timezone(&offset);

    let mut days_ahead = days_until_weekday(local.weekday(), week_start);
    if days_ahead == 0 && local.time() >= kickoff_time() {
        days_ahead = SPRINT_LENGTH_DAYS;
    }

    let kickoff_date = local.date_naive() + Duration::days(days_ahead);
    to_utc(kickoff_date.and_time(kickoff_time()), offset)
}

/// The 7-day window for a 1-based sprint index. The first block begins at
/// the first occurrence of `week_start` on or after the local date of
/// `project_start`; the start instant is local midnight of the block's
/// first day, the due instant the last representable moment
/// (23:59:59.9999999 local) of the day six days later.
pub fn sprint_window(
    sprint_number: u32,
    project_start: DateTime<Utc>,
    week_start: Weekday,
    offset: FixedOffset,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_date = project_start.with_timezone(&offset).date_naive();
    let first_block = start_date + Duration::days(days_until_weekday(start_date.weekday(), week_start));

    let block_start =
        first_block + Duration::days(SPRINT_LENGTH_DAYS * i64::from(sprint_number.saturating_sub(1)));
    let block_end = block_start + Duration::days(SPRINT_LENGTH_DAYS - 1);

    let start = to_utc(block_start.and_time(NaiveTime::MIN), offset);
    let due = to_utc(block_end.and_time(sprint_due_time()), offset);
    (start, due)
}

/// Days from `from` forward to the next `target`, zero when they match.
fn days_until_weekday(from: Weekday, target: Weekday) -> i64 {
    i64::from((target.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}

fn whole_hour_offset(hours: i32) -> Option<FixedOffset> {
    if hours.abs() >= 24 {
        return None;
    }
    FixedOffset::east_opt(hours * SECS_PER_HOUR)
}

fn default_offset() -> FixedOffset {
    whole_hour_offset(DEFAULT_OFFSET_HOURS).unwrap_or_else(|| Utc.fix())
}

fn kickoff_time() -> NaiveTime {
    NaiveTime::from_hms_opt(KICKOFF_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// 23:59:59.9999999, the 100-nanosecond tick before local midnight.
fn sprint_due_time() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_900).unwrap_or(NaiveTime::MIN)
}

fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    match local.and_local_timezone(offset) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Unreachable for fixed offsets; resolve arithmetically anyway.
        LocalResult::None => {
            Utc.from_utc_datetime(&(local - Duration::seconds(i64::from(offset.local_minus_utc()))))
        }
    }
}
