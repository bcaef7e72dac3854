//! Phone tracer: metadata lookup for telephone numbers.
//!
//! Parsing, validity, formatting and classification are delegated to a
//! [`library::PhoneLibrary`]. The crate's own logic is the location
//! normalizer and its regional refinement table in [`location`].

pub mod library;
pub mod location;
pub mod report;
pub mod session;
pub mod tracer;

pub use library::{PhoneLibrary, PhonenumberLibrary};
pub use location::{country_name, normalize, LocationRecord};
pub use session::{OutputMode, Pacing, Session, TraceOptions};
pub use tracer::{PhoneInfo, TraceError, Tracer};
