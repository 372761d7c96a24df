//! The theme registry.
//!
//! Themes are compiled in. Lookups never fail: an absent or unknown id
//! resolves to the default theme.

use serde::Serialize;

use crate::decorations::{DecorationKind as D, Placement};
use crate::svg::Element;
use crate::{ColorPalette, Viewport, forest_background, night_background};

/// Draws the static backdrop for a theme.
pub type BackgroundRenderer = fn(Viewport, &ColorPalette) -> Element;

/// Id of the theme used when none, or an unknown one, is requested.
pub const DEFAULT_THEME_ID: &str = "default";

/// A named visual theme.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub palette: ColorPalette,
    #[serde(skip)]
    pub background: BackgroundRenderer,
    /// Baseline agents stand on.
    pub ground_y: f32,
    #[serde(skip)]
    pub environment: &'static [Placement],
}

impl ThemeConfig {
    pub fn render_background(&self, viewport: Viewport) -> Element {
        (self.background)(viewport, &self.palette)
    }

    /// Background with the environment placements drawn over it.
    pub fn render_environment(&self, viewport: Viewport) -> Element {
        self.render_background(viewport).child(
            crate::svg::group()
                .class("environment")
                .children(self.environment.iter().map(Placement::render)),
        )
    }
}

const GROVE: &[Placement] = &[
    Placement::new(D::Cloud, 180.0, 90.0, 0),
    Placement::new(D::Cloud, 620.0, 60.0, 1),
    Placement::new(D::Cloud, 940.0, 130.0, 2),
    Placement::new(D::Tree, 60.0, 540.0, 0),
    Placement::new(D::Tree, 1140.0, 545.0, 1),
    Placement::new(D::Stream, 420.0, 665.0, 0),
    Placement::new(D::Mushroom, 110.0, 640.0, 0),
    Placement::new(D::Mushroom, 1080.0, 655.0, 1),
    Placement::new(D::Flower, 240.0, 660.0, 0),
    Placement::new(D::Flower, 270.0, 672.0, 1),
    Placement::new(D::Flower, 960.0, 668.0, 4),
];

const HOLLOW: &[Placement] = &[
    Placement::new(D::Cloud, 300.0, 110.0, 2),
    Placement::new(D::Tree, 60.0, 540.0, 2),
    Placement::new(D::Tree, 1140.0, 545.0, 2),
    Placement::new(D::Mushroom, 130.0, 650.0, 2),
    Placement::new(D::Mushroom, 150.0, 660.0, 2),
    Placement::new(D::Mushroom, 1060.0, 650.0, 2),
];

const GLADE: &[Placement] = &[
    Placement::new(D::Cloud, 520.0, 80.0, 1),
    Placement::new(D::Tree, 60.0, 540.0, 3),
    Placement::new(D::Tree, 1140.0, 545.0, 3),
    Placement::new(D::Mushroom, 100.0, 650.0, 3),
    Placement::new(D::Mushroom, 1090.0, 660.0, 1),
    Placement::new(D::Flower, 230.0, 668.0, 1),
];

const PINES: &[Placement] = &[
    Placement::new(D::Cloud, 220.0, 70.0, 0),
    Placement::new(D::Cloud, 860.0, 100.0, 0),
    Placement::new(D::Tree, 60.0, 540.0, 2),
    Placement::new(D::Tree, 1140.0, 545.0, 0),
    Placement::new(D::Stream, 420.0, 665.0, 2),
];

static THEMES: [ThemeConfig; 4] = [
    ThemeConfig {
        id: DEFAULT_THEME_ID,
        name: "Sunny Grove",
        palette: ColorPalette::SUNNY_GROVE,
        background: forest_background,
        ground_y: 580.0,
        environment: GROVE,
    },
    ThemeConfig {
        id: "night",
        name: "Moonlit Hollow",
        palette: ColorPalette::MOONLIT_HOLLOW,
        background: night_background,
        ground_y: 580.0,
        environment: HOLLOW,
    },
    ThemeConfig {
        id: "autumn",
        name: "Autumn Glade",
        palette: ColorPalette::AUTUMN_GLADE,
        background: forest_background,
        ground_y: 575.0,
        environment: GLADE,
    },
    ThemeConfig {
        id: "winter",
        name: "Snowy Pines",
        palette: ColorPalette::SNOWY_PINES,
        background: forest_background,
        ground_y: 570.0,
        environment: PINES,
    },
];

/// All registered themes, default first.
pub fn themes() -> &'static [ThemeConfig] {
    &THEMES
}

pub fn is_registered(id: &str) -> bool {
    THEMES.iter().any(|t| t.id == id)
}

/// Resolve a theme id, falling back to the default theme.
pub fn get_theme(id: Option<&str>) -> &'static ThemeConfig {
    let Some(id) = id else {
        return &THEMES[0];
    };
    match THEMES.iter().find(|t| t.id == id) {
        Some(theme) => theme,
        None => {
            tracing::debug!(theme = id, "Unknown theme, using default");
            &THEMES[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::ptr;

    #[test]
    fn default_is_first_and_named() {
        assert_eq!(themes()[0].id, DEFAULT_THEME_ID);
        assert_eq!(themes()[0].name, "Sunny Grove");
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = themes().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), themes().len());
    }

    #[test]
    fn missing_and_unknown_ids_fall_back_to_default() {
        let default = get_theme(Some(DEFAULT_THEME_ID));
        assert!(ptr::eq(get_theme(None), default));
        assert!(ptr::eq(get_theme(Some("nonexistent-id")), default));
        assert!(ptr::eq(get_theme(Some("")), default));
    }

    #[test]
    fn known_ids_resolve_to_themselves() {
        for theme in themes() {
            assert!(ptr::eq(get_theme(Some(theme.id)), theme));
            assert!(is_registered(theme.id));
        }
        assert!(!is_registered("Default"));
    }

    #[test]
    fn ground_line_sits_inside_the_ground_band() {
        for theme in themes() {
            assert!(theme.ground_y >= crate::GROUND_TOP);
            assert!(theme.ground_y < Viewport::DEFAULT.height as f32);
        }
    }

    #[test]
    fn night_theme_draws_a_moon() {
        let bg = get_theme(Some("night")).render_background(Viewport::DEFAULT);
        assert_eq!(bg.find_by_class("moon").len(), 1);
    }

    #[test]
    fn environment_is_layered_over_background() {
        let theme = get_theme(None);
        let el = theme.render_environment(Viewport::DEFAULT);
        assert_eq!(el.get_attr("class"), Some("background"));
        let env = &el.find_by_class("environment")[0];
        assert_eq!(env.elements().count(), theme.environment.len());
    }
}
