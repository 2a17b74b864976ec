use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::Result;

/// Write a default daily-post.toml, leaving an existing file alone
pub fn init(root: &Path, path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| root.join(config::DEFAULT_FILE_NAME));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}
