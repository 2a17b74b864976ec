use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Helper to create a Git repository with an identity and one commit
fn create_test_git_repo(path: &std::path::Path) {
    StdCommand::new("git")
        .args(["init"])
        .current_dir(path)
        .output()
        .unwrap();

    StdCommand::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()
        .unwrap();

    StdCommand::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()
        .unwrap();

    fs::write(path.join("README.md"), "daily log").unwrap();
    StdCommand::new("git")
        .args(["add", "."])
        .current_dir(path)
        .output()
        .unwrap();

    StdCommand::new("git")
        .args(["commit", "-m", "Initial commit"])
        .current_dir(path)
        .output()
        .unwrap();
}

fn daily_post(root: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("daily-post");
    cmd.current_dir(root)
        .env("NO_COLOR", "1")
        // keep git from discovering a repository above the temp dir
        .env("GIT_CEILING_DIRECTORIES", root.parent().unwrap());
    cmd
}

#[test]
fn test_creates_todays_post() {
    let temp_dir = TempDir::new().unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    daily_post(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"));

    let post = temp_dir.path().join("posts").join(format!("{}.md", today));
    let content = fs::read_to_string(post).unwrap();
    assert_eq!(
        content.lines().next().unwrap(),
        format!("# Daily log — {}", today)
    );
}

#[test]
fn test_explicit_date() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["-d", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01.md"));

    let content = fs::read_to_string(temp_dir.path().join("posts/2025-06-01.md")).unwrap();
    assert!(content.contains("**Date:** 2025-06-01"));
    assert!(content.contains("**Tomorrow's plan:** (tomorrow's plan)"));
}

#[test]
fn test_second_run_reports_existing_post() {
    let temp_dir = TempDir::new().unwrap();
    let post = temp_dir.path().join("posts/2025-06-01.md");

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01"])
        .assert()
        .success();

    fs::write(&post, "edited by hand").unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File already exists"));

    assert_eq!(fs::read_to_string(&post).unwrap(), "edited by hand");
    let files_count = fs::read_dir(temp_dir.path().join("posts")).unwrap().count();
    assert_eq!(files_count, 1);
}

#[test]
fn test_invalid_date_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-13-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(!temp_dir.path().join("posts").exists());
}

#[test]
fn test_impossible_calendar_date_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-02-30"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date format"));

    assert!(!temp_dir.path().join("posts/2025-02-30.md").exists());
}

#[test]
fn test_commit_without_repository_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01", "--commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("Committed and pushed"))
        .stderr(predicate::str::contains("Command failed: git add"))
        .stderr(predicate::str::contains("Command failed: git push"));

    assert!(temp_dir.path().join("posts/2025-06-01.md").exists());
}

#[test]
fn test_commit_in_repository_records_commit() {
    let temp_dir = TempDir::new().unwrap();
    create_test_git_repo(temp_dir.path());

    // no remote is configured, so only the push fails
    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01", "--commit"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Command failed: git push"));

    let log = StdCommand::new("git")
        .args(["log", "-1", "--pretty=%s", "--name-only"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let log = String::from_utf8_lossy(&log.stdout);
    assert!(log.contains("chore: add 2025-06-01 daily post"));
    assert!(log.contains("posts/2025-06-01.md"));
}

#[test]
fn test_root_option() {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join("journal");
    fs::create_dir(&repo).unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01", "--root", "journal"])
        .assert()
        .success();

    assert!(repo.join("posts/2025-06-01.md").exists());
    assert!(!temp_dir.path().join("posts").exists());
}

#[test]
fn test_config_file_changes_posts_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("daily-post.toml"),
        "posts_dir = \"entries\"\n",
    )
    .unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01"])
        .assert()
        .success();

    assert!(temp_dir.path().join("entries/2025-06-01.md").exists());
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot read config"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01", "--dry-run", "--commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Daily log — 2025-06-01"))
        .stderr(predicate::str::contains("skipping --commit"));

    assert!(!temp_dir.path().join("posts").exists());
}

#[test]
fn test_init_config_then_post_uses_it() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("daily-post.toml");

    daily_post(temp_dir.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let config_content = fs::read_to_string(&config_path).unwrap();
    fs::write(
        &config_path,
        config_content.replace("posts_dir = \"posts\"", "posts_dir = \"entries\""),
    )
    .unwrap();

    daily_post(temp_dir.path())
        .arg("--init-config")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    daily_post(temp_dir.path())
        .args(["--date", "2025-06-01"])
        .assert()
        .success();

    assert!(temp_dir.path().join("entries/2025-06-01.md").exists());
}

#[test]
fn test_year_zero_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    daily_post(temp_dir.path())
        .args(["--date", "0000-01-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(!temp_dir.path().join("posts").exists());
}
