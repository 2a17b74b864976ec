use thiserror::Error;

/// Daily post error types
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Invalid date format: date must be in YYYY-MM-DD format (got '{0}')")]
    InvalidDateFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {command}{}", stderr_suffix(.stderr))]
    CommandFailed { command: String, stderr: String },

    #[error("Could not open file automatically: {0}")]
    OpenFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Child stderr on its own line, or nothing when the child was silent
fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Result type for daily post operations
pub type Result<T> = std::result::Result<T, PostError>;
