//! The phone-number library seam.
//!
//! Everything the tracer knows about a number comes through [`PhoneLibrary`]:
//! parsing, validity, geocoding, carrier, time zones, formatting and type.
//! [`PhonenumberLibrary`] is the production implementation.

pub mod backend;
pub mod regions;

pub use backend::PhonenumberLibrary;

use std::fmt;
use thiserror::Error;

/// Errors raised by the library seam.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The text is not a recognisable phone number.
    #[error("{0}")]
    Parse(String),
    /// A default region that the library does not know.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}

/// Output formats supported by [`PhoneLibrary::format_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    International,
    National,
}

/// Classification of a number as reported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::FixedLine => "Fixed Line",
            Self::FixedLineOrMobile => "Fixed Line or Mobile",
            Self::TollFree => "Toll Free",
            Self::PremiumRate => "Premium Rate",
            Self::SharedCost => "Shared Cost",
            Self::Voip => "VOIP",
            Self::PersonalNumber => "Personal Number",
            Self::Pager => "Pager",
            Self::Uan => "UAN",
            Self::Voicemail => "Voicemail",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Black-box phone-number capabilities.
///
/// Lookups return `Option`/empty collections when the library has no data;
/// callers decide what default to show.
pub trait PhoneLibrary {
    /// The library's parsed representation of a number.
    type Number;

    /// Parse `text`. `default_region` (ISO 3166-1 alpha-2) applies to numbers
    /// written without a leading `+<code>`.
    fn parse(&self, text: &str, default_region: Option<&str>) -> Result<Self::Number, LibraryError>;

    fn is_valid_number(&self, number: &Self::Number) -> bool;

    /// Numeric calling code, e.g. 44.
    fn country_code(&self, number: &Self::Number) -> u16;

    /// National significant number as digits.
    fn national_number(&self, number: &Self::Number) -> u64;

    /// Free-text location, e.g. "Mountain View, CA" or just "Germany".
    fn geocoder_description(&self, number: &Self::Number, locale: &str) -> Option<String>;

    fn carrier_name(&self, number: &Self::Number, locale: &str) -> Option<String>;

    /// IANA zone names, most specific first.
    fn time_zones_for_number(&self, number: &Self::Number) -> Vec<String>;

    fn format_number(&self, number: &Self::Number, format: NumberFormat) -> String;

    fn number_type(&self, number: &Self::Number) -> NumberType;
}
