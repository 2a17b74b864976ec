//! Command-line interface module
//!
//! Runs the single post command: resolve the date, write the entry, then
//! optionally publish and open it. `--init-config` writes a default config
//! file instead.

pub mod config;
pub mod post;

use chrono::NaiveDate;
use std::path::PathBuf;

/// Process-wide inputs, captured once in `main`
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Absolute repository root
    pub root: PathBuf,
    /// Local calendar date of the run
    pub today: NaiveDate,
    /// OS identifier, as in `std::env::consts::OS`
    pub os: String,
}
