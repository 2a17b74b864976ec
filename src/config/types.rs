use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Daily post configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (relative to the repository root) holding the entries
    pub posts_dir: PathBuf,

    /// Version-control settings used by `--commit`
    pub vcs: Vcs,

    /// Viewer settings used by `--open`
    pub open: Open,
}

/// Version-control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Vcs {
    /// Executable invoked for add/commit/push
    pub program: String,

    /// Remote passed to push; bare `push` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Branch passed to push, only used together with `remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Viewer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Open {
    /// Overrides the platform opener on every OS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            vcs: Vcs::default(),
            open: Open::default(),
        }
    }
}

impl Default for Vcs {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: None,
            branch: None,
        }
    }
}
