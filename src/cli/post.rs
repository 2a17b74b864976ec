use std::path::PathBuf;

use crate::cli::RunContext;
use crate::config;
use crate::date;
use crate::display;
use crate::error::Result;
use crate::models::Entry;
use crate::opener::{CommandOpener, Opener, Platform};
use crate::process::{CommandRunner, SystemRunner};
use crate::publish::Publisher;
use crate::renderer::Renderer;
use crate::writer::{EntryWriter, WriteOutcome};

/// Options of the post command
#[derive(Debug, Clone, Default)]
pub struct PostArgs {
    pub date: Option<String>,
    pub commit: bool,
    pub open: bool,
    pub dry_run: bool,
    pub config: Option<PathBuf>,
}

/// Create (or find) the entry and run the optional follow-up steps
pub fn run(args: PostArgs, ctx: &RunContext) -> Result<()> {
    let runner = SystemRunner::new(&ctx.root);
    run_with(args, ctx, &runner)
}

/// [`run`] with the process runner supplied by the caller
pub fn run_with(args: PostArgs, ctx: &RunContext, runner: &dyn CommandRunner) -> Result<()> {
    let entry = Entry::new(date::resolve(args.date.as_deref(), ctx.today)?);
    let config = config::resolve(args.config.as_deref(), &ctx.root)?;
    let renderer = Renderer::default();

    if args.dry_run {
        display::preview(&renderer.render(&entry));
        if args.commit || args.open {
            eprintln!("Dry run: skipping --commit and --open");
        }
        return Ok(());
    }

    let writer = EntryWriter::new(&ctx.root, &config.posts_dir, &renderer);
    let outcome = writer.write(&entry)?;

    match &outcome {
        WriteOutcome::Created(path) => println!("Created: {}", path.display()),
        WriteOutcome::AlreadyExists(path) => {
            println!("File already exists: {}", path.display())
        }
    }

    if args.commit {
        let report = Publisher::new(runner, &config.vcs).publish(&entry, outcome.path());
        if !report.all_succeeded() {
            tracing::debug!("Publish steps failed: {:?}", report.failed_steps());
        }
        println!("Committed and pushed (if git remote is configured).");
    }

    if args.open {
        let opener = CommandOpener::new(runner, Platform::detect(&ctx.os))
            .with_program(config.open.program.clone());
        if let Err(e) = opener.open(outcome.path()) {
            eprintln!("Warning: {}", e);
        }
    }

    Ok(())
}
