//! Core types for form date extraction (JSON contracts + output models).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::key::DateKey;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One form submission document. Unknown fields are silently ignored, and a
/// modeled field of the wrong shape reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormDocument {
  #[serde(default, deserialize_with = "object_or_none")]
  pub form: Option<Form>,
}

/// The `form` payload of a submission. Only the date-bearing fields are modeled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Form {
  #[serde(default, deserialize_with = "object_or_none")]
  pub meta: Option<FormMeta>,
  #[serde(default, deserialize_with = "string_or_none")]
  pub encounter_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormMeta {
  #[serde(default, rename = "timeEnd", deserialize_with = "string_or_none")]
  pub time_end: Option<String>,
  #[serde(default, rename = "timeStart", deserialize_with = "string_or_none")]
  pub time_start: Option<String>,
}

/// Empty elements arrive as `""` and attributed ones as maps; neither is a
/// nested record, so anything but a JSON object is `None`.
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  match Value::deserialize(deserializer)? {
    value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
    _ => Ok(None),
  }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(Some(s)),
    _ => Ok(None),
  }
}

impl FormDocument {
  pub fn meta(&self) -> Option<&FormMeta> {
    self.form.as_ref()?.meta.as_ref()
  }

  pub fn time_end(&self) -> Option<&str> {
    self.meta()?.time_end.as_deref()
  }

  pub fn time_start(&self) -> Option<&str> {
    self.meta()?.time_start.as_deref()
  }

  pub fn encounter_date(&self) -> Option<&str> {
    self.form.as_ref()?.encounter_date.as_deref()
  }
}

// ---------------------------------------------------------------------------
// Date source
// ---------------------------------------------------------------------------

/// Which document field supplied the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
  TimeEnd,
  TimeStart,
  EncounterDate,
  None,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateOutput {
  /// RFC 3339 rendering, `null` for an invalid date.
  pub date: Option<String>,
  pub valid: bool,
  pub source: DateSource,
  #[serde(skip_serializing_if = "KeyField::is_omitted")]
  pub key: KeyField,
}

/// View key slot of a [`DateOutput`]: omitted entirely, or present (possibly `null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
  Omitted,
  Present(Option<DateKey>),
}

impl KeyField {
  pub fn is_omitted(&self) -> bool {
    matches!(self, Self::Omitted)
  }
}

impl Serialize for KeyField {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Omitted | Self::Present(None) => serializer.serialize_none(),
      Self::Present(Some(key)) => key.serialize(serializer),
    }
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for undecodable input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_form_is_null_safe() {
    let doc: FormDocument = serde_json::from_str("{}").unwrap();
    assert!(doc.meta().is_none());
    assert!(doc.time_end().is_none());
    assert!(doc.encounter_date().is_none());
  }

  #[test]
  fn null_links_are_absent() {
    let doc: FormDocument =
      serde_json::from_str(r#"{"form": {"meta": null, "encounter_date": null}}"#).unwrap();
    assert!(doc.meta().is_none());
    assert!(doc.encounter_date().is_none());
  }

  #[test]
  fn camel_case_meta_fields() {
    let doc: FormDocument = serde_json::from_str(
      r#"{"form": {"meta": {"timeEnd": "2010-07-23", "timeStart": "2010-07-22", "username": "admin"}}}"#,
    )
    .unwrap();
    assert_eq!(doc.time_end(), Some("2010-07-23"));
    assert_eq!(doc.time_start(), Some("2010-07-22"));
  }

  #[test]
  fn empty_meta_element_is_absent() {
    let doc: FormDocument =
      serde_json::from_str(r#"{"form": {"meta": "", "encounter_date": "2018-06-15"}}"#).unwrap();
    assert!(doc.meta().is_none());
    assert_eq!(doc.encounter_date(), Some("2018-06-15"));
  }

  #[test]
  fn non_object_form_is_absent() {
    for json in [r#"{"form": "x"}"#, r#"{"form": []}"#, r#"{"form": 7}"#] {
      let doc: FormDocument = serde_json::from_str(json).unwrap();
      assert!(doc.form.is_none(), "{json}");
    }
  }

  #[test]
  fn list_valued_meta_is_absent() {
    let doc: FormDocument =
      serde_json::from_str(r#"{"form": {"meta": ["2021-01-01T00:00:00Z"]}}"#).unwrap();
    assert!(doc.meta().is_none());
    assert!(doc.time_end().is_none());
  }

  #[test]
  fn attributed_element_is_absent() {
    let doc: FormDocument = serde_json::from_str(
      r#"{"form": {"meta": {"timeEnd": "2021-01-01T00:00:00Z", "timeStart": {"@nil": "true"}}, "encounter_date": {"@type": "date"}}}"#,
    )
    .unwrap();
    assert_eq!(doc.time_end(), Some("2021-01-01T00:00:00Z"));
    assert!(doc.time_start().is_none());
    assert!(doc.encounter_date().is_none());
  }

  #[test]
  fn non_string_dates_are_absent() {
    let doc: FormDocument =
      serde_json::from_str(r#"{"form": {"meta": {"timeEnd": 1279893311, "timeStart": true}}}"#).unwrap();
    assert!(doc.time_end().is_none());
    assert!(doc.time_start().is_none());
  }

  #[test]
  fn omitted_key_is_skipped() {
    let out = DateOutput {
      date: None,
      valid: false,
      source: DateSource::None,
      key: KeyField::Omitted,
    };
    let json = serde_json::to_string(&out).unwrap();
    assert_eq!(json, r#"{"date":null,"valid":false,"source":"none"}"#);
  }
}
