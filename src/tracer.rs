//! Number validation and info assembly.
//!
//! Validation is the only step that can fail a trace. Every enrichment step
//! after it yields an `Option` and falls back to a default in one place.

use serde::Serialize;
use thiserror::Error;

use crate::library::{LibraryError, NumberFormat, PhoneLibrary};
use crate::location::{self, LocationRecord, UNKNOWN};

/// Locale passed to geocoder and carrier lookups.
pub const LOOKUP_LOCALE: &str = "en";

/// Errors that abort a trace request.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Empty phone number provided")]
    EmptyNumber,

    #[error("Failed to parse phone number: {0}")]
    Parse(String),

    #[error("Invalid phone number")]
    InvalidNumber,

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TraceError {
    /// True for problems with the number the user typed, as opposed to
    /// failures of the tool itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyNumber | Self::Parse(_) | Self::InvalidNumber)
    }
}

/// Everything known about a traced number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneInfo {
    #[serde(flatten)]
    pub location: LocationRecord,
    pub carrier: String,
    pub timezone: Vec<String>,
    pub country_code: u16,
    pub country_name: String,
    pub national_number: u64,
    pub international_format: String,
    pub national_format: String,
    pub number_type: String,
}

/// Runs lookups against a [`PhoneLibrary`].
pub struct Tracer<L> {
    library: L,
    default_region: Option<String>,
}

impl<L: PhoneLibrary> Tracer<L> {
    pub fn new(library: L) -> Self {
        Self { library, default_region: None }
    }

    /// Region applied to numbers typed without a `+<code>` prefix.
    pub fn with_default_region(mut self, region: Option<String>) -> Self {
        self.default_region = region;
        self
    }

    /// Clean, parse and validate user input.
    ///
    /// Everything but ASCII digits and `+` is dropped before parsing. Returns
    /// the parsed number together with the cleaned text.
    pub fn validate_phone_number(&self, input: &str) -> Result<(L::Number, String), TraceError> {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        if cleaned.is_empty() {
            return Err(TraceError::EmptyNumber);
        }

        let number = self
            .library
            .parse(&cleaned, self.default_region.as_deref())
            .map_err(|e| match e {
                LibraryError::Parse(msg) => TraceError::Parse(msg),
                other => TraceError::Library(other),
            })?;

        if !self.library.is_valid_number(&number) {
            return Err(TraceError::InvalidNumber);
        }

        Ok((number, cleaned))
    }

    /// Geocode a number and normalize the description.
    pub fn detailed_location(&self, number: &L::Number, country_code: &str) -> LocationRecord {
        let description = self.library.geocoder_description(number, LOOKUP_LOCALE);
        let record = location::normalize(description.as_deref(), country_code);
        if record.is_unknown() {
            tracing::debug!(country_code, "no geocoder description");
        }
        record
    }

    /// Gather location, carrier, time zones, formats and type for a number.
    pub fn get_phone_info(&self, number: &L::Number) -> PhoneInfo {
        let lib = &self.library;
        let numeric_code = lib.country_code(number);
        let country_code = numeric_code.to_string();

        let location = self.detailed_location(number, &country_code);

        let carrier = lib.carrier_name(number, LOOKUP_LOCALE).filter(|c| !c.is_empty());
        if carrier.is_none() {
            tracing::debug!(%country_code, "no carrier data");
        }

        let mut timezone = lib.time_zones_for_number(number);
        if timezone.is_empty() {
            tracing::debug!(%country_code, "no time zone data");
            timezone.push(UNKNOWN.to_string());
        }

        PhoneInfo {
            location,
            carrier: carrier.unwrap_or_else(|| UNKNOWN.to_string()),
            timezone,
            country_name: location::country_name(&country_code),
            country_code: numeric_code,
            national_number: lib.national_number(number),
            international_format: lib.format_number(number, NumberFormat::International),
            national_format: lib.format_number(number, NumberFormat::National),
            number_type: lib.number_type(number).display_name().to_string(),
        }
    }
}
