//! Pick the representative date field of a form submission.

use crate::date::{parse_date, FormDate};
use crate::types::{DateSource, FormDocument};

/// Find the best date string in a document.
///
/// Checked in order: `form.meta.timeEnd`, `form.meta.timeStart`,
/// `form.encounter_date`. Empty strings count as absent.
pub fn date_string(doc: &FormDocument) -> (DateSource, Option<&str>) {
  let candidates = [
    (DateSource::TimeEnd, doc.time_end()),
    (DateSource::TimeStart, doc.time_start()),
    (DateSource::EncounterDate, doc.encounter_date()),
  ];
  candidates
    .into_iter()
    .find_map(|(source, value)| value.filter(|s| !s.is_empty()).map(|s| (source, Some(s))))
    .unwrap_or((DateSource::None, None))
}

/// The document's date; the epoch when it has none.
pub fn get_date(doc: &FormDocument) -> FormDate {
  parse_date(date_string(doc).1)
}
