//! Opening an entry in the platform's default viewer

use std::path::Path;

use crate::error::{PostError, Result};
use crate::process::{self, CommandRunner};

/// Host family, decides which opener command is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Posix,
}

impl Platform {
    /// Map an OS identifier such as `std::env::consts::OS`
    pub fn detect(os: &str) -> Self {
        match os {
            "macos" | "ios" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Posix,
        }
    }

    /// Program and arguments that open `path`
    fn command(self, path: &Path) -> (String, Vec<String>) {
        let target = path.display().to_string();
        match self {
            Platform::MacOs => ("open".to_string(), vec![target]),
            // `start` is a cmd builtin; the empty string is the window title
            Platform::Windows => (
                "cmd".to_string(),
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    target,
                ],
            ),
            Platform::Posix => ("xdg-open".to_string(), vec![target]),
        }
    }
}

/// Something able to show a file to the user
pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files by running an external command
pub struct CommandOpener<'a> {
    runner: &'a dyn CommandRunner,
    platform: Platform,
    program: Option<String>,
}

impl<'a> CommandOpener<'a> {
    pub fn new(runner: &'a dyn CommandRunner, platform: Platform) -> Self {
        Self {
            runner,
            platform,
            program: None,
        }
    }

    /// Use `program <path>` instead of the platform default
    pub fn with_program(mut self, program: Option<String>) -> Self {
        self.program = program;
        self
    }
}

impl Opener for CommandOpener<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = match &self.program {
            Some(program) => (program.clone(), vec![path.display().to_string()]),
            None => self.platform.command(path),
        };

        process::run_checked(self.runner, &program, &args)
            .map_err(|e| PostError::OpenFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::FakeRunner;

    fn path() -> &'static Path {
        Path::new("/repo/posts/2025-06-01.md")
    }

    #[test]
    fn test_detect() {
        assert_eq!(Platform::detect("macos"), Platform::MacOs);
        assert_eq!(Platform::detect("windows"), Platform::Windows);
        assert_eq!(Platform::detect("linux"), Platform::Posix);
        assert_eq!(Platform::detect("freebsd"), Platform::Posix);
    }

    #[test]
    fn test_macos_uses_open() {
        let runner = FakeRunner::default();
        CommandOpener::new(&runner, Platform::MacOs)
            .open(path())
            .unwrap();
        assert_eq!(runner.lines(), vec!["open /repo/posts/2025-06-01.md"]);
    }

    #[test]
    fn test_posix_uses_xdg_open() {
        let runner = FakeRunner::default();
        CommandOpener::new(&runner, Platform::Posix)
            .open(path())
            .unwrap();
        assert_eq!(runner.lines(), vec!["xdg-open /repo/posts/2025-06-01.md"]);
    }

    #[test]
    fn test_windows_goes_through_cmd_start() {
        let runner = FakeRunner::default();
        CommandOpener::new(&runner, Platform::Windows)
            .open(path())
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls[0].0, "cmd");
        assert_eq!(
            calls[0].1,
            vec!["/C", "start", "", "/repo/posts/2025-06-01.md"]
        );
    }

    #[test]
    fn test_program_override() {
        let runner = FakeRunner::default();
        CommandOpener::new(&runner, Platform::Windows)
            .with_program(Some("code".to_string()))
            .open(path())
            .unwrap();
        assert_eq!(runner.lines(), vec!["code /repo/posts/2025-06-01.md"]);
    }

    #[test]
    fn test_failure_becomes_open_failed() {
        let runner = FakeRunner::unspawnable();
        let err = CommandOpener::new(&runner, Platform::Posix)
            .open(path())
            .unwrap_err();
        assert!(matches!(err, PostError::OpenFailed(_)));
        assert!(err.to_string().contains("xdg-open"));
    }

    #[test]
    fn test_non_zero_exit_becomes_open_failed() {
        // FakeRunner fails on the first argument, which is the path here
        let runner = FakeRunner::failing(&["/repo/posts/2025-06-01.md"]);
        let err = CommandOpener::new(&runner, Platform::Posix)
            .open(path())
            .unwrap_err();
        assert!(matches!(err, PostError::OpenFailed(_)));
    }
}
