//! Terminal colors derived from a scene theme.

use hollow_scene::{Color as SceneColor, ThemeConfig, WaitingStyle};
use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used by every widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Id of the scene theme this was built from.
    pub id: &'static str,
    pub name: &'static str,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,

    // Agent activity
    pub working: Color,
    pub compacting: Color,
    pub idle: Color,
    pub done: Color,

    // UI elements
    pub border: Color,
    pub selection: Color,
    pub highlight: Color,

    pub bold: Style,
    pub dim: Style,
}

/// Convert a scene color for the terminal.
pub fn rgb(color: SceneColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl Theme {
    pub fn from_scene(theme: &ThemeConfig) -> Self {
        let palette = &theme.palette;
        let black = SceneColor::hex(0x000000);
        let white = SceneColor::hex(0xFFFFFF);
        let fg = rgb(palette.sky[2].mix(white, 0.6));

        Theme {
            id: theme.id,
            name: theme.name,

            bg: rgb(palette.ground.mix(black, 0.85)),
            fg,
            accent: rgb(palette.platform[0]),

            working: Color::Rgb(74, 222, 128),
            compacting: Color::Rgb(253, 224, 71),
            idle: Color::Rgb(148, 163, 184),
            done: Color::Rgb(34, 197, 94),

            border: rgb(palette.ground_accent),
            selection: rgb(palette.ground.mix(black, 0.5)),
            highlight: rgb(palette.sky[0]),

            bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
        }
    }

    /// Accent for an agent waiting on the user.
    pub fn waiting(&self, style: &WaitingStyle) -> Color {
        rgb(style.color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_scene(hollow_scene::get_theme(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hollow_scene::{get_theme, style_for};

    #[test]
    fn default_follows_default_scene_theme() {
        let theme = Theme::default();
        assert_eq!(theme.id, "default");
        assert_eq!(theme.name, "Sunny Grove");
    }

    #[test]
    fn highlight_is_top_sky_stop() {
        let night = get_theme(Some("night"));
        let theme = Theme::from_scene(night);
        assert_eq!(theme.highlight, rgb(night.palette.sky[0]));
    }

    #[test]
    fn waiting_uses_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.waiting(&style_for(None)), Color::Rgb(0xEA, 0xB3, 0x08));
    }

    #[test]
    fn themes_differ_by_palette() {
        let day = Theme::from_scene(get_theme(None));
        let night = Theme::from_scene(get_theme(Some("night")));
        assert_ne!(day.bg, night.bg);
        assert_eq!(day.working, night.working);
    }
}
