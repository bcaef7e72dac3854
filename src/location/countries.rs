//! Calling code → display name.

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("1", "United States/Canada"),
    ("91", "India"),
    ("44", "United Kingdom"),
    ("61", "Australia"),
    ("86", "China"),
    ("81", "Japan"),
    ("49", "Germany"),
    ("33", "France"),
    ("39", "Italy"),
    ("34", "Spain"),
    ("7", "Russia"),
    ("55", "Brazil"),
    ("52", "Mexico"),
    ("82", "South Korea"),
];

/// Display name for a calling code, e.g. "44" → "United Kingdom".
///
/// Codes outside the table get a synthesized "Country Code +<code>" label.
pub fn country_name(country_code: &str) -> String {
    COUNTRY_NAMES
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("Country Code +{}", country_code))
}
