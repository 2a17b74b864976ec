//! Entry writer module
//!
//! Creates `<root>/<posts_dir>/<date>.md` from the template. An existing entry
//! is never touched.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Entry;
use crate::renderer::Renderer;

/// Result of asking the writer for an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new file was written
    Created(PathBuf),
    /// The file was already there and left as is
    AlreadyExists(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Created(path) | WriteOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Writes entries below a posts directory
pub struct EntryWriter<'a> {
    posts_dir: PathBuf,
    renderer: &'a Renderer,
}

impl<'a> EntryWriter<'a> {
    /// `posts_dir` is resolved against `root` unless it is absolute
    pub fn new(root: &Path, posts_dir: &Path, renderer: &'a Renderer) -> Self {
        Self {
            posts_dir: root.join(posts_dir),
            renderer,
        }
    }

    /// Path the entry lives at, whether or not it exists yet
    pub fn target(&self, entry: &Entry) -> PathBuf {
        entry.path_in(&self.posts_dir)
    }

    /// Create the entry file unless it already exists
    pub fn write(&self, entry: &Entry) -> Result<WriteOutcome> {
        fs::create_dir_all(&self.posts_dir)?;

        let path = self.target(entry);
        if path.exists() {
            return Ok(WriteOutcome::AlreadyExists(path));
        }

        let markdown = self.renderer.render(entry);

        // create_new also covers a file appearing after the exists() check
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(WriteOutcome::AlreadyExists(path));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(markdown.as_bytes())?;

        tracing::info!("Created entry {}", path.display());
        Ok(WriteOutcome::Created(path))
    }
}
