//! [`PhoneLibrary`] backed by the `phonenumber` crate.
//!
//! Parsing, validity, formatting and number type come straight from the
//! crate's metadata. It carries no geocoding, carrier or time-zone tables, so
//! those fall back to region-level data from [`super::regions`].

use chrono_tz::Tz;
use phonenumber::{country, Mode, PhoneNumber, Type};

use super::regions;
use super::{LibraryError, NumberFormat, NumberType, PhoneLibrary};

/// Locale the built-in region names are written in.
const DATASET_LOCALE: &str = "en";

/// The production phone library.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonenumberLibrary;

impl PhonenumberLibrary {
    pub fn new() -> Self {
        Self
    }

    /// ISO region of a parsed number, e.g. "GB". `None` for non-geographic codes.
    pub fn region_of(&self, number: &PhoneNumber) -> Option<String> {
        number.country().id().map(|id| format!("{:?}", id))
    }
}

/// Resolve an ISO 3166-1 alpha-2 code to the crate's region id.
pub fn parse_region(region: &str) -> Result<country::Id, LibraryError> {
    region
        .trim()
        .to_ascii_uppercase()
        .parse::<country::Id>()
        .map_err(|_| LibraryError::UnknownRegion(region.to_string()))
}

impl PhoneLibrary for PhonenumberLibrary {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, default_region: Option<&str>) -> Result<PhoneNumber, LibraryError> {
        let region = default_region.map(parse_region).transpose()?;
        phonenumber::parse(region, text).map_err(|e| LibraryError::Parse(e.to_string()))
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn country_code(&self, number: &PhoneNumber) -> u16 {
        number.country().code()
    }

    fn national_number(&self, number: &PhoneNumber) -> u64 {
        number.national().value()
    }

    fn geocoder_description(&self, number: &PhoneNumber, locale: &str) -> Option<String> {
        if !locale.eq_ignore_ascii_case(DATASET_LOCALE) {
            tracing::debug!(locale, "no region names for locale");
            return None;
        }
        let region = self.region_of(number)?;
        regions::region_display_name(&region).map(str::to_string)
    }

    fn carrier_name(&self, _number: &PhoneNumber, _locale: &str) -> Option<String> {
        // The crate ships no carrier prefix tables.
        None
    }

    fn time_zones_for_number(&self, number: &PhoneNumber) -> Vec<String> {
        let Some(region) = self.region_of(number) else {
            return Vec::new();
        };
        regions::region_time_zones(&region)
            .iter()
            .filter(|zone| match zone.parse::<Tz>() {
                Ok(_) => true,
                Err(_) => {
                    tracing::warn!(zone = %zone, region = %region, "ignoring unrecognised time zone");
                    false
                }
            })
            .map(|zone| zone.to_string())
            .collect()
    }

    fn format_number(&self, number: &PhoneNumber, format: NumberFormat) -> String {
        let mode = match format {
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
        };
        number.format().mode(mode).to_string()
    }

    fn number_type(&self, number: &PhoneNumber) -> NumberType {
        match number.number_type(&phonenumber::metadata::DATABASE) {
            Type::Mobile => NumberType::Mobile,
            Type::FixedLine => NumberType::FixedLine,
            Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            Type::TollFree => NumberType::TollFree,
            Type::PremiumRate => NumberType::PremiumRate,
            Type::SharedCost => NumberType::SharedCost,
            Type::Voip => NumberType::Voip,
            Type::PersonalNumber => NumberType::PersonalNumber,
            Type::Pager => NumberType::Pager,
            Type::Uan => NumberType::Uan,
            Type::Voicemail => NumberType::Voicemail,
            _ => NumberType::Unknown,
        }
    }
}
