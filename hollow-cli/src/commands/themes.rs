//! List registered themes

use anyhow::Result;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use hollow_scene::{DEFAULT_THEME_ID, ThemeConfig};

#[derive(Args, Debug, Default)]
pub struct ThemesArgs {
    /// Print the registry as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ThemesArgs) -> Result<()> {
    let themes = hollow_scene::themes();
    if args.json {
        println!("{}", serde_json::to_string_pretty(themes)?);
    } else {
        println!("{}", themes_table(themes));
    }
    Ok(())
}

fn themes_table(themes: &[ThemeConfig]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Name", "Sky", "Ground", "Ground Y", "Decorations"]);

    for theme in themes {
        let id = if theme.id == DEFAULT_THEME_ID {
            format!("{} *", theme.id)
        } else {
            theme.id.to_string()
        };
        table.add_row(vec![
            id,
            theme.name.to_string(),
            theme.palette.sky[0].to_string(),
            theme.palette.ground.to_string(),
            theme.ground_y.to_string(),
            theme.environment.len().to_string(),
        ]);
    }
    table
}
