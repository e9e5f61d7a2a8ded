//! View keys for bucketing submissions by date.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::FormDate;

/// `[year, month0, day]` in UTC. Months are zero-based to match the keys
/// the datastore views already emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey(pub i32, pub u32, pub u32);

impl DateKey {
  pub fn year(&self) -> i32 {
    self.0
  }

  pub fn month0(&self) -> u32 {
    self.1
  }

  pub fn day(&self) -> u32 {
    self.2
  }
}

/// View key of a date; `None` for the invalid sentinel.
pub fn date_key(date: &FormDate) -> Option<DateKey> {
  let utc = date.to_utc()?;
  Some(DateKey(utc.year(), utc.month0(), utc.day()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::date::parse_date;

  #[test]
  fn epoch_key() {
    assert_eq!(date_key(&FormDate::epoch()), Some(DateKey(1970, 0, 1)));
  }

  #[test]
  fn key_uses_utc_day() {
    // 23:30 at -05:00 is already the next day in UTC.
    let d = parse_date(Some("2010-07-22T23:30:00-05:00"));
    let key = date_key(&d).unwrap();
    assert_eq!(key, DateKey(2010, 6, 23));
    assert_eq!((key.year(), key.month0(), key.day()), (2010, 6, 23));
  }

  #[test]
  fn invalid_has_no_key() {
    assert_eq!(date_key(&FormDate::Invalid), None);
  }

  #[test]
  fn serializes_as_array() {
    let json = serde_json::to_string(&DateKey(2018, 5, 15)).unwrap();
    assert_eq!(json, "[2018,5,15]");
  }
}
