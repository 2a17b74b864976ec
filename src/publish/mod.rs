//! Version-control publishing
//!
//! Stages, commits and pushes an entry. Each step is best-effort: a failure is
//! reported and the next step still runs. Nothing is rolled back.

use std::path::Path;

use crate::config::Vcs;
use crate::error::PostError;
use crate::models::Entry;
use crate::process::{self, CommandRunner};

/// Publishing step, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stage,
    Commit,
    Push,
}

/// How a single step went
#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub error: Option<PostError>,
}

/// All steps of one publish run
#[derive(Debug, Default)]
pub struct PublishReport {
    pub steps: Vec<StepOutcome>,
}

impl PublishReport {
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.error.is_none())
    }

    pub fn failed_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|s| s.error.is_some())
            .map(|s| s.step)
            .collect()
    }
}

/// Runs the add/commit/push sequence through a [`CommandRunner`]
pub struct Publisher<'a> {
    runner: &'a dyn CommandRunner,
    vcs: &'a Vcs,
}

impl<'a> Publisher<'a> {
    pub fn new(runner: &'a dyn CommandRunner, vcs: &'a Vcs) -> Self {
        Self { runner, vcs }
    }

    /// Stage `path`, commit it for `entry`, then push
    pub fn publish(&self, entry: &Entry, path: &Path) -> PublishReport {
        let mut report = PublishReport::default();

        for step in [Step::Stage, Step::Commit, Step::Push] {
            let args = self.args_for(step, entry, path);
            let error = process::run_checked(self.runner, &self.vcs.program, &args).err();

            if let Some(e) = &error {
                eprintln!("{}", e);
            }

            report.steps.push(StepOutcome { step, error });
        }

        report
    }

    fn args_for(&self, step: Step, entry: &Entry, path: &Path) -> Vec<String> {
        match step {
            Step::Stage => vec!["add".to_string(), path.display().to_string()],
            Step::Commit => vec![
                "commit".to_string(),
                "-m".to_string(),
                entry.commit_message(),
            ],
            Step::Push => {
                let mut args = vec!["push".to_string()];
                // a branch without a remote has no meaning to push
                if let Some(remote) = &self.vcs.remote {
                    args.push(remote.clone());
                    if let Some(branch) = &self.vcs.branch {
                        args.push(branch.clone());
                    }
                }
                args
            }
        }
    }
}
