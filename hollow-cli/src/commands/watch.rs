//! Watch command - replays an event stream in the terminal viewer

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Args;
use hollow_tui::{App, Replay};
use tracing::info;

use crate::config::{ConfigLoader, HollowConfig};
use crate::input::{Input, read_source};

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  hollow watch --input demos/workshop.jsonl
  hollow watch --input run.jsonl --theme night --tick-ms 200
")]
pub struct WatchArgs {
    /// JSON-lines event stream to replay
    #[arg(short, long)]
    pub input: PathBuf,

    /// Theme id (overrides config)
    #[arg(long)]
    pub theme: Option<String>,

    /// Milliseconds between frames (overrides config)
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl WatchArgs {
    pub fn tick_rate(&self, config: &HollowConfig) -> Duration {
        Duration::from_millis(self.tick_ms.unwrap_or(config.watch.tick_ms).max(1))
    }
}

async fn load_replay(path: &Path) -> Result<Replay> {
    if path == Path::new("-") {
        bail!("watch reads the terminal for input; pass the event stream as a file");
    }
    match Input::parse(&read_source(path).await?)? {
        Input::Frames(frames) => Ok(Replay::new(frames)),
        Input::Snapshot(_) => bail!(
            "{} holds a snapshot, watch needs a JSON-lines event stream",
            path.display()
        ),
    }
}

pub async fn run(args: WatchArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let replay = load_replay(&args.input).await?;
    let theme = args.theme.as_deref().unwrap_or(&config.scene.theme);

    info!(
        input = %args.input.display(),
        frames = replay.progress().1,
        theme,
        "Starting viewer"
    );

    hollow_tui::install_panic_hook();
    let mut app = App::new(replay, Some(theme)).with_tick_rate(args.tick_rate(&config));
    app.run().await?;

    info!(applied = app.replay.progress().0, "Viewer closed");
    Ok(())
}
