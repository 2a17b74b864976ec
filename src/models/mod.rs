//! Data models module
//!
//! Defines the dated Entry and the Placeholders filling its template.

pub mod entry;

pub use entry::{Entry, Placeholders};
