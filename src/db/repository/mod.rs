//! Parameterized lookups and COUNT aggregations over the imaging store.
//!
//! Free functions on `&Connection`, one fixed statement each. Bind
//! parameters throughout — identifiers are never interpolated into query
//! text.

pub mod image;
pub mod patient;
pub mod series;
pub mod study;
