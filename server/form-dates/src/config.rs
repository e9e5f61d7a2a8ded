//! Output configuration with sane defaults and environment overrides.

use crate::error::FormDateError;

pub const ENV_UTC_OUTPUT: &str = "FORM_DATES_UTC";
pub const ENV_INCLUDE_KEY: &str = "FORM_DATES_KEY";

/// Controls how extracted dates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Render dates converted to UTC instead of with their original offset.
  pub utc_output: bool,
  /// Emit the `[year, month0, day]` view key alongside the date.
  pub include_key: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      utc_output: false,
      include_key: true,
    }
  }
}

impl Config {
  /// Defaults overridden by `FORM_DATES_UTC` / `FORM_DATES_KEY` when set.
  pub fn from_env() -> Result<Self, FormDateError> {
    Self::from_lookup(|var| std::env::var(var).ok())
  }

  /// Same as [`Config::from_env`] with an injectable variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FormDateError> {
    let mut config = Self::default();
    if let Some(v) = lookup(ENV_UTC_OUTPUT) {
      config.utc_output = parse_flag(ENV_UTC_OUTPUT, &v)?;
    }
    if let Some(v) = lookup(ENV_INCLUDE_KEY) {
      config.include_key = parse_flag(ENV_INCLUDE_KEY, &v)?;
    }
    Ok(config)
  }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, FormDateError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    other => Err(FormDateError::config(
      var,
      format!("expected a boolean, got {:?}", other),
    )),
  }
}
