//! Form submission date extraction.
//!
//! Picks the representative date of a form submission document, falling back
//! through `form.meta.timeEnd`, `form.meta.timeStart` and `form.encounter_date`,
//! and parses it as ISO-8601. Missing dates become the epoch; unparseable ones
//! become an invalid-date value rather than an error.
//!
//! No DB, no network; pure computation.

pub mod config;
pub mod date;
pub mod error;
pub mod extract;
pub mod key;
pub mod select;
pub mod types;

pub use config::Config;
pub use date::{parse_date, FormDate};
pub use error::FormDateError;
pub use extract::Extractor;
pub use key::{date_key, DateKey};
pub use select::{date_string, get_date};
pub use types::{DateOutput, DateSource, FormDocument};
