//! Regional refinement table: per-country corrections to the generic split.
//!
//! Keyed by calling code ("1", "91", "44", "61"). Codes without a rule pass
//! the record through unchanged.

use super::types::{LocationPatch, LocationRecord};

/// What a refinement rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct RefineInput<'a> {
    /// Geocoder description, untouched.
    pub description: &'a str,
    /// Numeric calling code of the parsed number.
    pub numeric_code: Option<u16>,
}

type RefineFn = fn(&RefineInput<'_>) -> Option<LocationPatch>;

/// A single entry of the refinement table.
pub struct RegionRule {
    pub code: &'static str,
    pub label: &'static str,
    refine: RefineFn,
}

impl RegionRule {
    /// Evaluate the rule. `None` means it had nothing to correct.
    pub fn evaluate(&self, input: &RefineInput<'_>) -> Option<LocationPatch> {
        (self.refine)(input)
    }
}

const RULES: &[RegionRule] = &[
    RegionRule { code: "1", label: "United States/Canada", refine: refine_north_america },
    RegionRule { code: "91", label: "India", refine: refine_india },
    RegionRule { code: "44", label: "United Kingdom", refine: refine_uk },
    RegionRule { code: "61", label: "Australia", refine: refine_australia },
];

const UK_CITIES: &[&str] = &["London", "Manchester", "Birmingham", "Glasgow"];

/// Scanned in order; the first substring hit wins.
const AUSTRALIAN_STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

/// Look up the rule for a calling code (exact match).
pub fn rule_for(country_code: &str) -> Option<&'static RegionRule> {
    RULES.iter().find(|r| r.code == country_code)
}

/// Apply the rule registered for `country_code` to `record`.
///
/// `full_location` is never touched. When the rule yields nothing the record
/// comes back exactly as it went in.
pub fn refine(country_code: &str, mut record: LocationRecord, description: &str) -> LocationRecord {
    let Some(rule) = rule_for(country_code) else {
        return record;
    };

    let input = RefineInput {
        description,
        numeric_code: country_code.parse().ok(),
    };

    match rule.evaluate(&input) {
        Some(patch) => {
            tracing::debug!(code = rule.code, rule = rule.label, ?patch, "refined location");
            patch.apply(&mut record);
        }
        None => tracing::debug!(code = rule.code, "refinement rule did not match"),
    }
    record
}

// ─── Rules ──────────────────────────────────────────────────────

/// "City, State" → city/state, plus the country.
///
/// Calling code 1 is shared by the US and Canada and the numeric code is the
/// only signal available, so this always picks the US for code 1.
fn refine_north_america(input: &RefineInput<'_>) -> Option<LocationPatch> {
    let parts: Vec<&str> = input.description.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return None;
    }
    let country = if input.numeric_code == Some(1) { "United States" } else { "Canada" };
    Some(LocationPatch {
        city: Some(parts[0].to_string()),
        state: Some(parts[1].to_string()),
        country: Some(country.to_string()),
    })
}

/// Indian descriptions are often telecom circles, which map to states.
fn refine_india(input: &RefineInput<'_>) -> Option<LocationPatch> {
    let d = input.description;
    if !(d.contains("Telecom") || d.contains("Circle")) {
        return None;
    }
    Some(LocationPatch {
        state: Some(d.to_string()),
        country: Some("India".to_string()),
        ..Default::default()
    })
}

fn refine_uk(input: &RefineInput<'_>) -> Option<LocationPatch> {
    let city = UK_CITIES.iter().find(|c| **c == input.description)?;
    Some(LocationPatch {
        city: Some(city.to_string()),
        country: Some("United Kingdom".to_string()),
        ..Default::default()
    })
}

fn refine_australia(input: &RefineInput<'_>) -> Option<LocationPatch> {
    let state = AUSTRALIAN_STATES.iter().find(|s| input.description.contains(*s))?;
    Some(LocationPatch {
        state: Some(state.to_string()),
        country: Some("Australia".to_string()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str, state: &str, country: &str, full: &str) -> LocationRecord {
        LocationRecord {
            city: city.into(),
            state: state.into(),
            country: country.into(),
            full_location: full.into(),
        }
    }

    #[test]
    fn test_rule_lookup_exact_match() {
        assert_eq!(rule_for("1").unwrap().label, "United States/Canada");
        assert_eq!(rule_for("61").unwrap().label, "Australia");
        assert!(rule_for("11").is_none());
        assert!(rule_for(" 1").is_none());
        assert!(rule_for("").is_none());
    }

    #[test]
    fn test_north_america_city_state() {
        let before = record("New York", "NY", "NY", "New York, NY");
        let after = refine("1", before, "New York, NY");
        assert_eq!(after.city, "New York");
        assert_eq!(after.state, "NY");
        assert_eq!(after.country, "United States");
        assert_eq!(after.full_location, "New York, NY");
    }

    #[test]
    fn test_north_america_non_us_numeric_code() {
        let input = RefineInput { description: "Toronto, ON", numeric_code: None };
        let patch = refine_north_america(&input).unwrap();
        assert_eq!(patch.country.as_deref(), Some("Canada"));
    }

    #[test]
    fn test_north_america_three_parts_untouched() {
        let before = record("A", "B", "C", "A, B, C");
        let after = refine("1", before.clone(), "A, B, C");
        assert_eq!(after, before);
    }

    #[test]
    fn test_india_circle() {
        let before = record("Unknown", "Unknown", "Bangalore Telecom Circle", "Bangalore Telecom Circle");
        let after = refine("91", before, "Bangalore Telecom Circle");
        assert_eq!(after.state, "Bangalore Telecom Circle");
        assert_eq!(after.country, "India");
        assert_eq!(after.city, "Unknown");
    }

    #[test]
    fn test_india_plain_city_untouched() {
        let before = record("Unknown", "Unknown", "Mumbai", "Mumbai");
        assert_eq!(refine("91", before.clone(), "Mumbai"), before);
    }

    #[test]
    fn test_uk_exact_city_only() {
        let after = refine("44", record("Unknown", "Unknown", "London", "London"), "London");
        assert_eq!(after.city, "London");
        assert_eq!(after.country, "United Kingdom");

        let before = record("Unknown", "Unknown", "Greater London", "Greater London");
        assert_eq!(refine("44", before.clone(), "Greater London"), before);
    }

    #[test]
    fn test_australia_first_state_wins() {
        let before = record("Sydney", "NSW area", "NSW area", "Sydney, NSW area");
        let after = refine("61", before, "Sydney, NSW area");
        assert_eq!(after.state, "NSW");
        assert_eq!(after.country, "Australia");
        assert_eq!(after.city, "Sydney");

        // "NSW" precedes "SA" in the scan order.
        let input = RefineInput { description: "NSW/SA border", numeric_code: Some(61) };
        assert_eq!(refine_australia(&input).unwrap().state.as_deref(), Some("NSW"));
    }

    #[test]
    fn test_unmapped_code_is_identity() {
        let before = record("Berlin", "Berlin", "Germany", "Berlin, Berlin, Germany");
        assert_eq!(refine("49", before.clone(), "Berlin, Berlin, Germany"), before);
    }
}
