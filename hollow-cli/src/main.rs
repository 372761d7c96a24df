use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod input;

#[derive(Parser)]
#[command(name = "hollow", about = "Draw the agent workshop")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a snapshot or event stream to SVG
    Render(commands::render::RenderArgs),
    /// List available themes
    Themes(commands::themes::ThemesArgs),
    /// Show the project/branch/session tree
    Sessions(commands::sessions::SessionsArgs),
    /// Replay an event stream in the terminal
    Watch(commands::watch::WatchArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// `RUST_LOG` wins; otherwise `--verbose` picks debug over info.
fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// The viewer owns the terminal, so its logs go to a file.
fn init_file_logging(verbose: bool) -> Result<()> {
    let path = hollow_paths::log_file();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Watch(_)) {
        init_file_logging(cli.verbose)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(cli.verbose))
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args).await,
        Commands::Themes(args) => commands::themes::run(args),
        Commands::Sessions(args) => commands::sessions::run(args).await,
        Commands::Watch(args) => commands::watch::run(args).await,
        Commands::Config(args) => commands::config::run(args),
    }
}
