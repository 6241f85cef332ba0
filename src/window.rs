use chrono::{DateTime, Utc};

use crate::structs::TimeWindow;

impl TimeWindow {
  pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> TimeWindow {
    return TimeWindow { from, to };
  }

  pub fn unbounded() -> TimeWindow {
    return TimeWindow::default();
  }

  pub fn accepts(&self, item_date: DateTime<Utc>) -> bool {
    if let Some(from) = self.from {
      if item_date < from {
        return false;
      }
    }
    if let Some(to) = self.to {
      if item_date > to {
        return false;
      }
    }
    return true;
  }
}

#[cfg(test)]
mod tests {
  use chrono::Duration;

  use super::*;
  use crate::dates::{datetime_from_timestamp, parse_date};

  #[test]
  fn unbounded_window_accepts_everything() {
    let window = TimeWindow::unbounded();
    assert!(window.accepts(datetime_from_timestamp(0).unwrap()));
    assert!(window.accepts(datetime_from_timestamp(4102444800).unwrap()));
  }

  #[test]
  fn bounds_are_inclusive() {
    let from = parse_date("2021-01-01").unwrap();
    let to = parse_date("2021-02-01").unwrap();
    let window = TimeWindow::new(Some(from), Some(to));
    assert!(window.accepts(from));
    assert!(window.accepts(to));
    assert!(!window.accepts(from - Duration::days(1)));
    assert!(!window.accepts(to + Duration::days(1)));
    assert!(!window.accepts(from - Duration::seconds(1)));
    assert!(!window.accepts(to + Duration::seconds(1)));
  }

  #[test]
  fn open_sides_impose_no_constraint() {
    let bound = parse_date("2021-01-01").unwrap();
    let only_from = TimeWindow::new(Some(bound), None);
    assert!(only_from.accepts(bound + Duration::days(10000)));
    assert!(!only_from.accepts(bound - Duration::days(1)));
    let only_to = TimeWindow::new(None, Some(bound));
    assert!(only_to.accepts(datetime_from_timestamp(0).unwrap()));
    assert!(!only_to.accepts(bound + Duration::days(1)));
  }

  #[test]
  fn inverted_window_accepts_nothing() {
    let from = parse_date("2021-02-01").unwrap();
    let to = parse_date("2021-01-01").unwrap();
    let window = TimeWindow::new(Some(from), Some(to));
    assert!(!window.accepts(parse_date("2021-01-15").unwrap()));
    assert!(!window.accepts(from));
    assert!(!window.accepts(to));
  }
}
