//! Location subsystem for the phone tracer.
//!
//! Splits geocoder descriptions into city/state/country and applies the
//! per-region refinement table.

pub mod countries;
pub mod normalizer;
pub mod refine;
pub mod types;

pub use countries::country_name;
pub use normalizer::normalize;
pub use refine::{refine, rule_for, RegionRule};
pub use types::{LocationPatch, LocationRecord, UNKNOWN};
