//! Core types for the location subsystem.

use serde::Serialize;

/// Placeholder used for every field the geocoder could not supply.
pub const UNKNOWN: &str = "Unknown";

/// A structured location derived from a geocoder description.
///
/// Every field always holds a value; missing data is the `"Unknown"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    pub country: String,
    pub state: String,
    pub city: String,
    /// Raw geocoder text, kept verbatim (e.g. "Mountain View, CA")
    pub full_location: String,
}

impl Default for LocationRecord {
    fn default() -> Self {
        Self {
            country: UNKNOWN.into(),
            state: UNKNOWN.into(),
            city: UNKNOWN.into(),
            full_location: UNKNOWN.into(),
        }
    }
}

impl LocationRecord {
    /// True when the geocoder produced nothing for this number.
    pub fn is_unknown(&self) -> bool {
        self.full_location == UNKNOWN
    }

    pub(crate) fn set_country(&mut self, value: &str) {
        assign(&mut self.country, value);
    }

    pub(crate) fn set_state(&mut self, value: &str) {
        assign(&mut self.state, value);
    }

    pub(crate) fn set_city(&mut self, value: &str) {
        assign(&mut self.city, value);
    }
}

// Blank segments never replace a field, so the record stays fully populated.
fn assign(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

/// A correction produced by a regional refinement rule.
///
/// Only the fields that are `Some` overwrite the generic split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPatch {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl LocationPatch {
    pub(crate) fn apply(self, record: &mut LocationRecord) {
        if let Some(city) = self.city {
            record.set_city(&city);
        }
        if let Some(state) = self.state {
            record.set_state(&state);
        }
        if let Some(country) = self.country {
            record.set_country(&country);
        }
    }
}
