//! Extractor: turns form documents into date output records.

use crate::config::Config;
use crate::date::{parse_date, FormDate};
use crate::error::FormDateError;
use crate::key::date_key;
use crate::select::date_string;
use crate::types::*;

/// Applies field selection, parsing and rendering according to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Extractor {
  config: Config,
}

impl Extractor {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Extract the date of one document. Never fails; an unparseable date
  /// shows up as `valid: false`.
  pub fn process(&self, doc: &FormDocument) -> DateOutput {
    let (source, raw) = date_string(doc);
    let date = parse_date(raw);

    DateOutput {
      date: self.render(&date),
      valid: date.is_valid(),
      source,
      key: if self.config.include_key {
        KeyField::Present(date_key(&date))
      } else {
        KeyField::Omitted
      },
    }
  }

  /// Decode one JSON line and extract its date.
  pub fn process_line(&self, line: &str) -> Result<DateOutput, FormDateError> {
    let doc: FormDocument = serde_json::from_str(line)?;
    Ok(self.process(&doc))
  }

  fn render(&self, date: &FormDate) -> Option<String> {
    if self.config.utc_output {
      date.to_utc().map(|dt| dt.to_rfc3339())
    } else {
      date.as_datetime().map(|dt| dt.to_rfc3339())
    }
  }
}
