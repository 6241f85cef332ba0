use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Owner {
  #[serde(default)]
  pub reputation: i64,
  #[serde(default)]
  pub user_id: i64,
  #[serde(default)]
  pub user_type: String,
  #[serde(default)]
  pub profile_image: String,
  #[serde(default)]
  pub display_name: String,
  #[serde(default)]
  pub link: String,
}

/// One question from a saved `/questions` page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuestionItem {
  // used by analysis
  pub creation_date: i64,
  #[serde(default)]
  pub closed_date: Option<i64>,
  pub score: i64,
  // passed through
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub owner: Owner,
  #[serde(default)]
  pub is_answered: bool,
  #[serde(default)]
  pub view_count: i64,
  #[serde(default)]
  pub accepted_answer_id: Option<i64>,
  #[serde(default)]
  pub answer_count: i64,
  #[serde(default)]
  pub last_activity_date: i64,
  #[serde(default)]
  pub last_edit_date: Option<i64>,
  #[serde(default)]
  pub question_id: i64,
  #[serde(default)]
  pub content_license: Option<String>,
  #[serde(default)]
  pub link: String,
  #[serde(default)]
  pub title: String,
}

impl QuestionItem {
  pub fn created_at(&self) -> Option<DateTime<Utc>> {
    return dates::datetime_from_timestamp(self.creation_date);
  }

  pub fn is_negative(&self) -> bool {
    return self.score < 0;
  }

  /// A missing or zero `closed_date` means the question is still open.
  pub fn is_closed(&self) -> bool {
    return self.closed_date.map_or(false, |closed_date| closed_date > 0);
  }
}

/// One page of the API reply, saved verbatim by the fetch step.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reply {
  pub items: Vec<QuestionItem>,
  #[serde(default)]
  pub has_more: bool,
  #[serde(default)]
  pub quota_max: i64,
  #[serde(default)]
  pub quota_remaining: i64,
  #[serde(default)]
  pub total: i64,
}

/// Inclusive `[from, to]` filter on question creation time. `None` leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeWindow {
  pub from: Option<DateTime<Utc>>,
  pub to: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagAnalysisResult {
  pub total: usize,
  pub negative: usize,
  pub closed: usize,
  pub closed_and_negative: usize,
  // min and max creation dates of accepted items
  pub min_date: Option<DateTime<Utc>>,
  pub max_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratios {
  pub negative: f64,
  pub closed: f64,
  pub closed_and_negative: f64,
}

impl TagAnalysisResult {
  /// `None` when nothing matched; there is no ratio of an empty window.
  pub fn ratios(&self) -> Option<Ratios> {
    if self.total == 0 {
      return None;
    }
    let total = self.total as f64;
    return Some(Ratios {
      negative: self.negative as f64 / total,
      closed: self.closed as f64 / total,
      closed_and_negative: self.closed_and_negative as f64 / total,
    });
  }
}
