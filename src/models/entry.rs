use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::date::DATE_FORMAT;

/// A single dated journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Calendar day this entry belongs to
    pub date: NaiveDate,
}

/// Static text written into the seven hand-edited template fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub topic: &'static str,
    pub learned: &'static str,
    pub experiment: &'static str,
    pub cmd: &'static str,
    pub mistake: &'static str,
    pub links: &'static str,
    pub tomorrow: &'static str,
}

impl Entry {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The date as `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// File name of the entry, `<date>.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.date_label())
    }

    /// Location of the entry inside a posts directory
    pub fn path_in(&self, posts_dir: &Path) -> PathBuf {
        posts_dir.join(self.file_name())
    }

    /// Commit message used when publishing this entry
    pub fn commit_message(&self) -> String {
        format!("chore: add {} daily post", self.date_label())
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            topic: "(add topic here)",
            learned: "(write 1-3 lines)",
            experiment: "(describe the short experiment or problem solved)",
            cmd: "(any shell/solidity snippet)",
            mistake: "(one mistake learned from)",
            links: "(links if any)",
            tomorrow: "(tomorrow's plan)",
        }
    }
}
