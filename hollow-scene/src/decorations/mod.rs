//! Variant-indexed decorations and particle effects.
//!
//! Every decoration takes a `variant` and derives its look from small fixed
//! tables through [`crate::pick`]. Tables inside one decoration share a
//! length, so a decoration's whole style repeats with period `VARIANTS`.

mod cloud;
mod flower;
mod mushroom;
mod particles;
mod stream;
mod tree;
mod workstation;

pub use cloud::{Cloud, CloudStyle};
pub use flower::{Flower, FlowerStyle};
pub use mushroom::{Mushroom, MushroomStyle};
pub use particles::{CheckmarkBurst, Spark, SteamPuff};
pub use stream::{Stream, StreamStyle};
pub use tree::{Tree, TreeStyle};
pub use workstation::{Workstation, WorkstationStyle};

use crate::Point;
use crate::svg::Element;

/// Environment decorations a theme can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Tree,
    Cloud,
    Mushroom,
    Flower,
    Stream,
    Workstation,
}

/// A decoration pinned to a spot in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: DecorationKind,
    pub at: Point,
    pub variant: u32,
}

impl Placement {
    pub const fn new(kind: DecorationKind, x: f32, y: f32, variant: u32) -> Self {
        Self {
            kind,
            at: Point::new(x, y),
            variant,
        }
    }

    pub fn render(&self) -> Element {
        let variant = self.variant;
        match self.kind {
            DecorationKind::Tree => Tree { variant }.render(self.at),
            DecorationKind::Cloud => Cloud { variant }.render(self.at),
            DecorationKind::Mushroom => Mushroom { variant }.render(self.at),
            DecorationKind::Flower => Flower { variant }.render(self.at),
            DecorationKind::Stream => Stream { variant }.render(self.at),
            DecorationKind::Workstation => Workstation { variant }.render(self.at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_renders_its_kind() {
        let el = Placement::new(DecorationKind::Mushroom, 10.0, 20.0, 1).render();
        assert_eq!(el.get_attr("class"), Some("decoration mushroom"));
        assert_eq!(el.get_attr("transform"), Some("translate(10 20)"));
    }

    #[test]
    fn same_placement_renders_identically() {
        let placement = Placement::new(DecorationKind::Flower, 5.0, 5.0, 7);
        assert_eq!(placement.render(), placement.render());
    }
}
