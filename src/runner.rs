use std::io::Write;
use std::path::Path;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::analysis::analyze_dir;
use crate::config::AnalyzeConfig;
use crate::errors::Result;
use crate::months;
use crate::report::{self, ResultRow, TagReport};
use crate::structs::TimeWindow;
use crate::tags;

pub fn analyze_tag(base_dir: &Path, tag: &str, window: &TimeWindow, by_month: bool) -> Result<TagReport> {
  let rows: Vec<ResultRow> = if by_month {
    months::analyze_by_month(base_dir, tag, window)?
      .iter()
      .map(|(end, result)| ResultRow::new(Some(*end), result))
      .collect()
  } else {
    let result = analyze_dir(base_dir, tag, window)?;
    vec![ResultRow::new(window.to, &result)]
  };
  return Ok(TagReport { tag: tag.to_string(), rows });
}

/// Builds the report of every tag, in tag order. Nothing is returned if any tag fails.
pub fn build_reports(config: &AnalyzeConfig) -> Result<Vec<TagReport>> {
  let window = config.window();
  if config.bymonth {
    months::require_explicit_window(&window)?;
  }
  let tags = match config.requested_tags() {
    Some(tags) => tags,
    None => tags::discover_tags(&config.dir)?,
  };
  log::info!("analyzing {} tags in {} by_month = {}", tags.len(), config.dir.display(), config.bymonth);
  return tags
    .par_iter()
    .map(|tag| analyze_tag(&config.dir, tag, &window, config.bymonth))
    .collect();
}

pub fn run<W: Write>(config: &AnalyzeConfig, writer: &mut W) -> Result<()> {
  let reports = build_reports(config)?;
  for tag_report in &reports {
    report::write_tag_report(writer, tag_report)?;
  }
  writer.flush()?;
  return Ok(());
}
