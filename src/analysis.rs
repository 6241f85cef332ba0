use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::{Error, Result};
use crate::snapshots::SnapshotRecords;
use crate::structs::{QuestionItem, TagAnalysisResult, TimeWindow};

impl TagAnalysisResult {
  /// Counts one question that already passed the window filter. `item_date` is its creation date.
  pub fn record(&mut self, item: &QuestionItem, item_date: DateTime<Utc>) {
    self.total += 1;
    if item.is_negative() {
      self.negative += 1;
    }
    if item.is_closed() {
      self.closed += 1;
      if item.is_negative() {
        self.closed_and_negative += 1;
      }
    }
    if self.min_date.map_or(true, |min_date| item_date < min_date) {
      self.min_date = Some(item_date);
    }
    if self.max_date.map_or(true, |max_date| item_date > max_date) {
      self.max_date = Some(item_date);
    }
  }
}

pub fn analyze_items<I>(items: I, window: &TimeWindow) -> Result<TagAnalysisResult>
where
  I: IntoIterator<Item = Result<QuestionItem>>,
{
  let mut result = TagAnalysisResult::default();
  for item in items {
    let item = item?;
    let item_date = item.created_at().ok_or(Error::InvalidTimestamp(item.creation_date))?;
    if !window.accepts(item_date) {
      continue;
    }
    log::trace!("accepted question_id = {} score = {} closed = {}", item.question_id, item.score, item.is_closed());
    result.record(&item, item_date);
  }
  return Ok(result);
}

/// Analyzes the saved pages in `base_dir/tag`, counting only questions created
/// within `window` (both ends inclusive).
pub fn analyze_dir(base_dir: &Path, tag: &str, window: &TimeWindow) -> Result<TagAnalysisResult> {
  let records = SnapshotRecords::open(base_dir, tag)?;
  let result = analyze_items(records, window)?;
  log::debug!(
    "tag = {} from = {:?} to = {:?} total = {} negative = {} closed = {} closed_and_negative = {} min_date = {:?} max_date = {:?}",
    tag,
    window.from,
    window.to,
    result.total,
    result.negative,
    result.closed,
    result.closed_and_negative,
    result.min_date,
    result.max_date
  );
  return Ok(result);
}
