//! In-memory entity fixtures.
//!
//! Fixtures build entity models with consistent default values without touching the
//! database. Use them for unit tests of domain conversions and capacity rules; use the
//! `factory` module when a row must exist.

pub mod course_group;
pub mod request;
