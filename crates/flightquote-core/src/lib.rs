//! flightquote-core
//!
//! Quotation domain types, lenient payload decoding and the read-only
//! reference data (airports, corporate names) served next to the generator.
//! No rendering or HTTP dependency.

pub mod error;
pub mod models;
pub mod reference;
