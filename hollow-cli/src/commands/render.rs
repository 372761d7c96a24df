//! Render a snapshot or event stream to an SVG document

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hollow_scene::{Scene, Viewport};
use tracing::info;

use crate::config::{ConfigLoader, HollowConfig};
use crate::input::load_snapshot;

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  hollow render --input demos/workshop.jsonl --output workshop.svg
  cat snapshot.json | hollow render --theme night
")]
pub struct RenderArgs {
    /// Snapshot JSON or JSON-lines event stream (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Theme id (overrides config)
    #[arg(long)]
    pub theme: Option<String>,

    /// Canvas width (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Flags win over configured values.
    pub fn scene(&self, config: &HollowConfig) -> Scene {
        let theme = self.theme.as_deref().unwrap_or(&config.scene.theme);
        let viewport = Viewport::new(
            self.width.unwrap_or(config.scene.width),
            self.height.unwrap_or(config.scene.height),
        );
        Scene::new(hollow_scene::get_theme(Some(theme)), viewport)
    }
}

pub async fn run(args: RenderArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let snapshot = load_snapshot(&args.input).await?;
    let scene = args.scene(&config);
    let svg = scene.render_svg(&snapshot);

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &svg)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                theme = scene.theme().id,
                agents = snapshot.agents.len(),
                "Wrote scene"
            );
        }
        None => println!("{svg}"),
    }
    Ok(())
}
