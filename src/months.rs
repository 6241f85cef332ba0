use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::analysis::analyze_dir;
use crate::dates;
use crate::errors::{Error, Result};
use crate::structs::{TagAnalysisResult, TimeWindow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthBucket {
  pub start: DateTime<Utc>,
  pub end: DateTime<Utc>,
}

impl MonthBucket {
  /// Both ends inclusive, so a question created exactly at `end` also lands in the next bucket.
  pub fn window(&self) -> TimeWindow {
    return TimeWindow::new(Some(self.start), Some(self.end));
  }
}

pub fn month_buckets(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<MonthBucket> {
  let mut buckets = vec![];
  let mut pointer = from;
  while pointer < to {
    let end = dates::add_month(pointer);
    buckets.push(MonthBucket { start: pointer, end });
    pointer = end;
  }
  return buckets;
}

pub fn require_explicit_window(window: &TimeWindow) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
  return match (window.from, window.to) {
    (Some(from), Some(to)) => Ok((from, to)),
    _ => Err(Error::Config(String::from(
      "by-month analysis requires an explicit window: set -fromdate and -todate",
    ))),
  };
}

/// Runs one analysis per calendar month of `window`, labeled with each bucket's end date.
pub fn analyze_by_month(base_dir: &Path, tag: &str, window: &TimeWindow) -> Result<Vec<(DateTime<Utc>, TagAnalysisResult)>> {
  let (from, to) = require_explicit_window(window)?;
  let buckets = month_buckets(from, to);
  log::debug!("tag = {} num_buckets = {}", tag, buckets.len());
  // collect keeps bucket order
  return buckets
    .par_iter()
    .map(|bucket| -> Result<(DateTime<Utc>, TagAnalysisResult)> {
      let result = analyze_dir(base_dir, tag, &bucket.window())?;
      return Ok((bucket.end, result));
    })
    .collect();
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;
  use crate::dates::parse_date;

  fn date(value: &str) -> DateTime<Utc> {
    return parse_date(value).unwrap();
  }

  #[test]
  fn buckets_cover_whole_months() {
    let buckets = month_buckets(date("2021-01-01"), date("2021-03-01"));
    assert_eq!(
      buckets,
      vec![
        MonthBucket { start: date("2021-01-01"), end: date("2021-02-01") },
        MonthBucket { start: date("2021-02-01"), end: date("2021-03-01") },
      ]
    );
  }

  #[test]
  fn last_bucket_may_overshoot_to() {
    let buckets = month_buckets(date("2021-01-01"), date("2021-02-15"));
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[1].end, date("2021-03-01"));
  }

  #[test]
  fn bucket_widths_follow_calendar_overflow() {
    let buckets = month_buckets(date("2021-01-31"), date("2021-04-01"));
    let ends: Vec<DateTime<Utc>> = buckets.iter().map(|bucket| bucket.end).collect();
    assert_eq!(ends, vec![date("2021-03-03"), date("2021-04-03")]);
  }

  #[test]
  fn empty_or_inverted_range_has_no_buckets() {
    assert!(month_buckets(date("2021-03-01"), date("2021-03-01")).is_empty());
    assert!(month_buckets(date("2021-03-01"), date("2021-01-01")).is_empty());
  }

  #[test]
  fn requires_both_bounds() {
    let base = tempfile::tempdir().unwrap();
    let window = TimeWindow::new(Some(date("2021-01-01")), None);
    assert!(matches!(analyze_by_month(base.path(), "go", &window), Err(Error::Config(_))));
    let window = TimeWindow::new(None, Some(date("2021-01-01")));
    assert!(matches!(analyze_by_month(base.path(), "go", &window), Err(Error::Config(_))));
  }

  #[test]
  fn analyzes_each_bucket_in_order() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("go");
    fs::create_dir_all(&dir).unwrap();
    let jan = date("2021-01-10").timestamp();
    let feb = date("2021-02-10").timestamp();
    let boundary = date("2021-02-01").timestamp();
    let page = serde_json::json!({
      "items": [
        { "creation_date": jan, "score": -1 },
        { "creation_date": feb, "score": 1, "closed_date": feb + 60 },
        { "creation_date": boundary, "score": 0 },
      ],
      "has_more": false,
    });
    fs::write(dir.join("so001.json"), page.to_string()).unwrap();
    let window = TimeWindow::new(Some(date("2021-01-01")), Some(date("2021-03-01")));
    let results = analyze_by_month(base.path(), "go", &window).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, date("2021-02-01"));
    assert_eq!(results[1].0, date("2021-03-01"));
    // the boundary question is counted by both buckets
    assert_eq!(results[0].1.total, 2);
    assert_eq!(results[0].1.negative, 1);
    assert_eq!(results[1].1.total, 2);
    assert_eq!(results[1].1.closed, 1);
  }
}
