//! Terminal display module
//!
//! Previews an entry on stdout, styled when the terminal allows it.

mod formatter;
mod terminal;

pub use formatter::preview;
