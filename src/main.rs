mod cli;
mod config;
mod date;
mod display;
mod error;
mod models;
mod opener;
mod process;
mod publish;
mod renderer;
mod writer;

use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::cli::post::PostArgs;
use crate::cli::RunContext;

#[derive(Parser)]
#[command(name = "daily-post", version)]
#[command(about = "Create a dated daily log entry and optionally commit or open it", long_about = None)]
struct Cli {
    /// Date for the post (YYYY-MM-DD). Default: today
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Also stage, commit and push the post
    #[arg(short, long)]
    commit: bool,

    /// Open the post in the default viewer
    #[arg(short, long)]
    open: bool,

    /// Repository root holding the posts directory (defaults to the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Path to config file (defaults to <root>/daily-post.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rendered post instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Write a default config file (at --config or <root>/daily-post.toml) and exit
    #[arg(long)]
    init_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(error::PostError::from)
        .and_then(|cwd| {
            let ctx = RunContext {
                root: match cli.root {
                    Some(root) => cwd.join(root),
                    None => cwd,
                },
                today: Local::now().date_naive(),
                os: std::env::consts::OS.to_string(),
            };
            if cli.init_config {
                return cli::config::init(&ctx.root, cli.config);
            }
            let args = PostArgs {
                date: cli.date,
                commit: cli.commit,
                open: cli.open,
                dry_run: cli.dry_run,
                config: cli.config,
            };
            cli::post::run(args, &ctx)
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
