//! Date parsing for form submission timestamps.
//!
//! Dates are stored as ISO-8601, so full timestamps carry their own offset.
//! Older records hold bare `YYYY-MM-DD` dates, which are pinned to midnight
//! UTC so the result does not depend on the host timezone.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Date-time layouts with a numeric offset, colon optional (`+02:00`, `+0200`).
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Offset-less date-time layouts, tried in order. Interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Result of parsing a date string: an instant with its original offset, or
/// the invalid-date sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDate {
  Valid(DateTime<FixedOffset>),
  Invalid,
}

impl FormDate {
  /// 1970-01-01T00:00:00Z, the value for a missing date.
  pub fn epoch() -> Self {
    Self::Valid(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
  }

  pub fn is_valid(&self) -> bool {
    matches!(self, Self::Valid(_))
  }

  pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
    match self {
      Self::Valid(dt) => Some(dt),
      Self::Invalid => None,
    }
  }

  pub fn to_utc(&self) -> Option<DateTime<Utc>> {
    self.as_datetime().map(|dt| dt.with_timezone(&Utc))
  }
}

impl From<DateTime<FixedOffset>> for FormDate {
  fn from(dt: DateTime<FixedOffset>) -> Self {
    Self::Valid(dt)
  }
}

impl From<DateTime<Utc>> for FormDate {
  fn from(dt: DateTime<Utc>) -> Self {
    Self::Valid(dt.fixed_offset())
  }
}

impl fmt::Display for FormDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Valid(dt) => f.write_str(&dt.to_rfc3339()),
      Self::Invalid => f.write_str("Invalid Date"),
    }
  }
}

/// Parse a form date string.
///
/// `None` and `""` give the epoch. Unparseable input gives
/// [`FormDate::Invalid`]; this function never fails.
pub fn parse_date(input: Option<&str>) -> FormDate {
  match input {
    None | Some("") => FormDate::epoch(),
    Some(s) => parse_iso8601(s).map_or(FormDate::Invalid, FormDate::Valid),
  }
}

fn parse_iso8601(s: &str) -> Option<DateTime<FixedOffset>> {
  // Two-digit and expanded (+YYYYYY) years are rejected rather than guessed.
  if !has_four_digit_year(s) {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt);
  }
  if let Some(dt) = OFFSET_DATETIME_FORMATS
    .iter()
    .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
  {
    return Some(dt);
  }
  if let Some(naive) = s.strip_suffix(['Z', 'z']) {
    return parse_naive_datetime(naive).map(utc);
  }
  if let Some(naive) = parse_naive_datetime(s) {
    return Some(utc(naive));
  }
  parse_date_only(s).and_then(|d| d.and_hms_opt(0, 0, 0)).map(utc)
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
  NAIVE_DATETIME_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; reduced forms start at day one.
fn parse_date_only(s: &str) -> Option<NaiveDate> {
  match s.len() {
    4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
    7 => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok(),
    _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
  }
}

fn has_four_digit_year(s: &str) -> bool {
  let bytes = s.as_bytes();
  bytes.len() >= 4
    && bytes[..4].iter().all(u8::is_ascii_digit)
    && bytes.get(4).map_or(true, |&b| b == b'-')
}

fn utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
  naive.and_utc().fixed_offset()
}
