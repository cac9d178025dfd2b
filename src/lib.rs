//! Read-only HTTP query façade over a SQLite store of medical-imaging
//! metadata (patients, studies, series, images).
//!
//! The store is populated and owned by an external ingestion process;
//! this crate answers counting and lookup questions about it over
//! HTTP/JSON. Every request opens its own short-lived read-only
//! connection — there is no shared mutable state.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
