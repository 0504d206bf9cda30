//! gw-source - Comment sources for giveaway
//!
//! This crate turns exported comment tables into draw sessions.

mod csv_source;

pub use csv_source::CsvSource;
