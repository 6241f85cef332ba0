use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};

use crate::errors::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD` as midnight UTC.
pub fn parse_date(date: &str) -> Result<DateTime<Utc>> {
  let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
    .map_err(|err| Error::Config(format!("invalid date {:?}, expected YYYY-MM-DD: {}", date, err)))?;
  return Ok(midnight(parsed));
}

pub fn datetime_from_timestamp(timestamp: i64) -> Option<DateTime<Utc>> {
  return Utc.timestamp_opt(timestamp, 0).single();
}

pub fn format_date(date: &DateTime<Utc>) -> String {
  return date.format(DATE_FORMAT).to_string();
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
  return Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default());
}

fn days_in_month(year: i32, month: u32) -> u32 {
  let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
  let first = NaiveDate::from_ymd_opt(year, month, 1);
  let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1);
  return match (first, next_first) {
    (Some(first), Some(next_first)) => next_first.signed_duration_since(first).num_days() as u32,
    _ => 31,
  };
}

/// Adds one calendar month keeping the day of month. A day past the end of the
/// target month spills over into the month after (2021-01-31 -> 2021-03-03),
/// it is not clamped.
pub fn add_month(date: DateTime<Utc>) -> DateTime<Utc> {
  let (year, month) = if date.month() == 12 { (date.year() + 1, 1) } else { (date.year(), date.month() + 1) };
  let day = date.day();
  let last_day = days_in_month(year, month);
  let target = NaiveDate::from_ymd_opt(year, month, day.min(last_day))
    .and_then(|target| target.checked_add_days(Days::new(day.saturating_sub(last_day) as u64)));
  return match target {
    Some(target) => Utc.from_utc_datetime(&target.and_time(date.time())),
    // only reachable at the very end of chrono's range
    None => date + chrono::Duration::days(31),
  };
}
