//! Wiki format tests
//!
//! Tests for bidirectional wiki ↔ Markdown conversion.

mod export;
mod import;
mod lists;
mod round_trip;
mod tables;
