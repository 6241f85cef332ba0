use std::ffi::OsString;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use url::Url;

use crate::dates;
use crate::fetch::QUESTIONS_ENDPOINT;
use crate::structs::TimeWindow;
use crate::tags;

fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
  return dates::parse_date(value).map_err(|err| err.to_string());
}

/// Computes negative/closed ratios over questions saved by fetch-questions.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "analyze-questions", version)]
pub struct AnalyzeConfig {
  /// base directory with results
  #[arg(long)]
  pub dir: PathBuf,
  /// start date in 2006-01-02 format
  #[arg(long, value_parser = parse_date_arg)]
  pub fromdate: Option<DateTime<Utc>>,
  /// end date in 2006-01-02 format
  #[arg(long, value_parser = parse_date_arg)]
  pub todate: Option<DateTime<Utc>>,
  /// tags separated by commas; every subdirectory of -dir when omitted
  #[arg(long, value_delimiter = ',')]
  pub tags: Option<Vec<String>>,
  /// analyze by month
  #[arg(
    long,
    action = ArgAction::Set,
    num_args = 0..=1,
    require_equals = true,
    default_value = "false",
    default_missing_value = "true"
  )]
  pub bymonth: bool,
}

impl AnalyzeConfig {
  pub fn window(&self) -> TimeWindow {
    return TimeWindow::new(self.fromdate, self.todate);
  }

  /// Requested tags, or `None` when they should be discovered.
  pub fn requested_tags(&self) -> Option<Vec<String>> {
    let requested = tags::clean_tag_list(self.tags.as_deref().unwrap_or_default());
    if requested.is_empty() {
      return None;
    }
    return Some(requested);
  }
}

/// Saves every page of `/questions` for each tag as `<dir>/<tag>/soNNN.json`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fetch-questions", version)]
pub struct FetchConfig {
  /// base directory to store results
  #[arg(long)]
  pub dir: PathBuf,
  /// start date in 2006-01-02 format
  #[arg(long, value_parser = parse_date_arg)]
  pub fromdate: DateTime<Utc>,
  /// end date in 2006-01-02 format
  #[arg(long, value_parser = parse_date_arg)]
  pub todate: DateTime<Utc>,
  /// tags separated by commas
  #[arg(long, value_delimiter = ',', required = true)]
  pub tags: Vec<String>,
  /// stackapps key for increased quota
  #[arg(long, env = "STACK_KEY", hide_env_values = true)]
  pub key: Option<String>,
  /// questions endpoint
  #[arg(long, default_value = QUESTIONS_ENDPOINT)]
  pub endpoint: Url,
}

/// Rewrites Go-style single-dash long flags (`-dir`, `-dir=x`) to `--dir` so
/// both spellings work. A value-taking flag is joined with the argument after
/// it (`--dir=-data`), so values starting with a dash stay values. `switches`
/// names the flags that take no separate value.
pub fn normalize_flags<I>(args: I, switches: &[&str]) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut normalized = vec![];
  let mut past_separator = false;
  let mut pending_flag: Option<String> = None;
  for (index, arg) in args.into_iter().enumerate() {
    if let Some(flag) = pending_flag.take() {
      let mut joined = OsString::from(format!("{}=", flag));
      joined.push(&arg);
      normalized.push(joined);
      continue;
    }
    // program name
    if index == 0 || past_separator {
      normalized.push(arg);
      continue;
    }
    let value = match arg.to_str() {
      Some(value) => value,
      None => {
        normalized.push(arg);
        continue;
      }
    };
    if value == "--" {
      past_separator = true;
      normalized.push(arg);
      continue;
    }
    let name = match long_flag_name(value) {
      Some(name) => name,
      None => {
        normalized.push(arg);
        continue;
      }
    };
    let flag = if value.starts_with("--") { value.to_string() } else { format!("-{}", value) };
    let takes_value = !value.contains('=') && !switches.iter().any(|switch| *switch == name) && name != "help" && name != "version";
    if takes_value {
      pending_flag = Some(flag);
    } else {
      normalized.push(OsString::from(flag));
    }
  }
  // flag without a value, left for clap to report
  if let Some(flag) = pending_flag {
    normalized.push(OsString::from(flag));
  }
  return normalized;
}

fn long_flag_name(value: &str) -> Option<&str> {
  let stripped = value.strip_prefix("--").or_else(|| value.strip_prefix('-'))?;
  let name = stripped.split('=').next().unwrap_or_default();
  if name.len() > 1 && name.chars().all(|c| c.is_ascii_alphabetic()) {
    return Some(name);
  }
  return None;
}

pub fn parse_analyze_config<I>(args: I) -> Result<AnalyzeConfig, clap::Error>
where
  I: IntoIterator<Item = OsString>,
{
  return AnalyzeConfig::try_parse_from(normalize_flags(args, &["bymonth"]));
}

pub fn parse_fetch_config<I>(args: I) -> Result<FetchConfig, clap::Error>
where
  I: IntoIterator<Item = OsString>,
{
  return FetchConfig::try_parse_from(normalize_flags(args, &[]));
}
