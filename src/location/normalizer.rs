//! Turns a free-text geocoder description into a [`LocationRecord`].
//!
//! Two stages: a generic comma split, then the regional rule for the calling
//! code (see [`super::refine`]). New regions only ever touch the rule table.

use super::refine;
use super::types::LocationRecord;

/// Normalize a geocoder description for a number with the given calling code.
///
/// `"City, State, Country"` splits into its three parts. A single segment is
/// taken as the country. With exactly two segments the second one fills both
/// `state` and `country` until a regional rule says otherwise.
pub fn normalize(description: Option<&str>, country_code: &str) -> LocationRecord {
    let mut record = LocationRecord::default();

    let raw = match description {
        Some(d) if !d.is_empty() => d,
        _ => return record,
    };
    record.full_location = raw.to_string();

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [single] => record.set_country(single),
        [first, second, rest @ ..] => {
            record.set_city(first);
            record.set_state(second);
            record.set_country(rest.last().unwrap_or(second));
        }
        // split() always yields at least one segment
        [] => {}
    }

    refine::refine(country_code, record, raw)
}
