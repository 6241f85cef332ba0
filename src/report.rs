use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dates;
use crate::errors::Result;
use crate::structs::TagAnalysisResult;

/// One output line: `date,total,negativeRatio,closedRatio,closedAndNegativeRatio`.
///
/// Ratios are left empty when nothing matched, and so is the date when there
/// is neither an explicit label nor any matched question.
#[derive(Serialize, Debug, PartialEq)]
pub struct ResultRow {
  pub date: String,
  pub total: usize,
  pub negative_ratio: String,
  pub closed_ratio: String,
  pub closed_and_negative_ratio: String,
}

fn format_ratio(ratio: f64) -> String {
  return format!("{:.3}", ratio);
}

impl ResultRow {
  pub fn new(label: Option<DateTime<Utc>>, result: &TagAnalysisResult) -> ResultRow {
    // if not explicit date, consider the max encountered date
    let date = label.or(result.max_date).map(|date| dates::format_date(&date)).unwrap_or_default();
    let ratios = result.ratios();
    return ResultRow {
      date,
      total: result.total,
      negative_ratio: ratios.map(|ratios| format_ratio(ratios.negative)).unwrap_or_default(),
      closed_ratio: ratios.map(|ratios| format_ratio(ratios.closed)).unwrap_or_default(),
      closed_and_negative_ratio: ratios.map(|ratios| format_ratio(ratios.closed_and_negative)).unwrap_or_default(),
    };
  }
}

#[derive(Debug, PartialEq)]
pub struct TagReport {
  pub tag: String,
  pub rows: Vec<ResultRow>,
}

/// Writes a blank line, the tag name, then one headerless CSV line per row.
pub fn write_tag_report<W: Write>(writer: &mut W, report: &TagReport) -> Result<()> {
  writeln!(writer)?;
  writeln!(writer, "{}", report.tag)?;
  let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(&mut *writer);
  for row in &report.rows {
    csv_writer.serialize(row)?;
  }
  csv_writer.flush()?;
  return Ok(());
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dates::parse_date;

  fn render(report: &TagReport) -> String {
    let mut buffer = vec![];
    write_tag_report(&mut buffer, report).unwrap();
    return String::from_utf8(buffer).unwrap();
  }

  #[test]
  fn formats_ratios_with_three_decimals() {
    let result = TagAnalysisResult {
      total: 3,
      negative: 2,
      closed: 1,
      closed_and_negative: 1,
      ..Default::default()
    };
    let row = ResultRow::new(parse_date("2021-02-01").ok(), &result);
    assert_eq!(row.date, "2021-02-01");
    assert_eq!(row.negative_ratio, "0.667");
    assert_eq!(row.closed_ratio, "0.333");
    assert_eq!(row.closed_and_negative_ratio, "0.333");
  }

  #[test]
  fn falls_back_to_max_date() {
    let result = TagAnalysisResult {
      total: 1,
      min_date: parse_date("2021-01-03").ok(),
      max_date: parse_date("2021-01-20").ok(),
      ..Default::default()
    };
    assert_eq!(ResultRow::new(None, &result).date, "2021-01-20");
  }

  #[test]
  fn renders_tag_block() {
    let full = TagAnalysisResult {
      total: 4,
      negative: 1,
      closed: 2,
      closed_and_negative: 1,
      ..Default::default()
    };
    let report = TagReport {
      tag: String::from("go"),
      rows: vec![
        ResultRow::new(parse_date("2021-02-01").ok(), &full),
        ResultRow::new(parse_date("2021-03-01").ok(), &TagAnalysisResult::default()),
      ],
    };
    assert_eq!(render(&report), "\ngo\n2021-02-01,4,0.250,0.500,0.250\n2021-03-01,0,,,\n");
  }

  #[test]
  fn empty_result_without_label_has_empty_fields() {
    let report = TagReport {
      tag: String::from("rust"),
      rows: vec![ResultRow::new(None, &TagAnalysisResult::default())],
    };
    assert_eq!(render(&report), "\nrust\n,0,,,\n");
  }
}
