//! Markdown renderer module
//!
//! Fills the fixed daily log template for an entry and reads the date field
//! back out of a rendered file.

use chrono::NaiveDate;

use crate::date;
use crate::models::{Entry, Placeholders};

/// Label of the field carrying the entry date
const DATE_FIELD: &str = "**Date:**";

/// Markdown hard line break closing every field line
const BREAK: &str = "  \n";

/// Markdown renderer for daily log entries
pub struct Renderer {
    placeholders: Placeholders,
}

impl Renderer {
    pub fn new(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    /// Render a complete entry to Markdown
    pub fn render(&self, entry: &Entry) -> String {
        let date = entry.date_label();
        let p = &self.placeholders;
        let mut output = String::new();

        output.push_str(&format!("# Daily log — {}\n\n", date));

        output.push_str(&format!("{} {}{}", DATE_FIELD, date, BREAK));
        output.push_str(&format!("**Topic / Concept:** {}{}", p.topic, BREAK));
        output.push_str(&format!(
            "**What I learned (1–3 lines):** {}{}",
            p.learned, BREAK
        ));
        output.push_str(&format!(
            "**Problem I solved / experiment I ran:** {}{}",
            p.experiment, BREAK
        ));
        output.push_str(&format!(
            "**Command / Code snippet (if any):** `{}`{}",
            p.cmd, BREAK
        ));
        output.push_str(&format!("**One mistake I made:** {}{}", p.mistake, BREAK));
        output.push_str(&format!("**Links / References:** {}{}", p.links, BREAK));
        output.push_str(&format!("**Tomorrow's plan:** {}\n", p.tomorrow));

        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Placeholders::default())
    }
}

/// Read the `**Date:**` field of a rendered entry
pub fn parse_date(content: &str) -> Option<NaiveDate> {
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(DATE_FIELD))
        .and_then(|value| date::parse_strict(value.trim()).ok())
}
