//! Scene rendering for the hollow agent workshop.
//!
//! Everything here is a pure function of its inputs: a theme id picks a
//! palette and background, a `variant` picks among fixed decoration styles,
//! a `stage` unlocks avatar accessories, and a waiting type picks a status
//! style. The output is an SVG element tree.

mod avatars;
mod background;
mod color;
mod decorations;
mod geometry;
mod palette;
mod scene;
mod status;
pub mod svg;
mod theme;
mod variant;

pub use avatars::{Accessory, Animal, Avatar, AvatarSpec, MAX_STAGE, stage_for_tasks};
pub use background::{GROUND_TOP, forest_background, night_background};
pub use color::{Color, ColorParseError};
pub use decorations::{
    CheckmarkBurst, Cloud, DecorationKind, Flower, Mushroom, Placement, Spark, SteamPuff, Stream,
    Tree, Workstation,
};
pub use geometry::{Point, Viewport};
pub use palette::ColorPalette;
pub use scene::Scene;
pub use status::{Activity, WaitingStyle, is_compacting, ring_color_for, style_for};
pub use theme::{
    BackgroundRenderer, DEFAULT_THEME_ID, ThemeConfig, get_theme, is_registered, themes,
};
pub use variant::pick;
