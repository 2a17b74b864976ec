//! Configuration module
//!
//! Handles loading and saving of the optional daily-post.toml file.
//! Defines Config, Vcs, and Open types.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Vcs};

use crate::error::{PostError, Result};
use std::fs;
use std::path::Path;

/// File name looked up in the repository root when `--config` is not given
pub const DEFAULT_FILE_NAME: &str = "daily-post.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        PostError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Without one, `<root>/daily-post.toml` is used
/// when present and the built-in defaults otherwise.
pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => {
            let path = root.join(DEFAULT_FILE_NAME);
            if path.is_file() {
                load(&path)
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| PostError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
