//! Static background layers.
//!
//! Positions are literal; only colors come from the palette.

use crate::svg::{Element, circle, ellipse, group, polygon, rect};
use crate::{ColorPalette, Viewport};

/// Top edge of the ground band.
pub const GROUND_TOP: f32 = 520.0;

const SKY_GRADIENT_ID: &str = "sky-gradient";
const TREE_OPACITY: f32 = 0.35;

/// Tree-line silhouettes: (x, height).
const TREE_LINE: [(f32, f32); 9] = [
    (40.0, 150.0),
    (150.0, 190.0),
    (260.0, 130.0),
    (390.0, 210.0),
    (530.0, 160.0),
    (700.0, 200.0),
    (840.0, 140.0),
    (980.0, 220.0),
    (1120.0, 170.0),
];

/// Stars: (x, y, opacity).
const STARS: [(f32, f32, f32); 14] = [
    (60.0, 40.0, 0.9),
    (140.0, 110.0, 0.5),
    (230.0, 60.0, 0.7),
    (320.0, 150.0, 0.4),
    (410.0, 30.0, 0.8),
    (500.0, 95.0, 0.6),
    (610.0, 50.0, 0.9),
    (690.0, 130.0, 0.3),
    (780.0, 75.0, 0.7),
    (860.0, 20.0, 0.5),
    (950.0, 120.0, 0.8),
    (1030.0, 55.0, 0.4),
    (1110.0, 100.0, 0.6),
    (1170.0, 35.0, 0.9),
];

fn sky_gradient(palette: &ColorPalette) -> Element {
    let stops = [("0%", palette.sky[0]), ("55%", palette.sky[1]), ("100%", palette.sky[2])];
    Element::new("defs").child(
        Element::new("linearGradient")
            .attr("id", SKY_GRADIENT_ID)
            .attr("x1", 0)
            .attr("y1", 0)
            .attr("x2", 0)
            .attr("y2", 1)
            .children(stops.into_iter().map(|(offset, color)| {
                Element::new("stop")
                    .attr("offset", offset)
                    .attr("stop-color", color)
            })),
    )
}

fn tree_silhouette(index: usize, x: f32, height: f32, palette: &ColorPalette) -> Element {
    let leaf = palette.tree_leaf[index % 2];
    let base = GROUND_TOP;
    let half = height * 0.32;
    group()
        .opacity(TREE_OPACITY)
        .child(rect(x - 6.0, base - 30.0, 12.0, 30.0).fill(palette.tree_trunk))
        .child(
            polygon(&[
                (x - half, base - 24.0),
                (x, base - height),
                (x + half, base - 24.0),
            ])
            .fill(leaf),
        )
}

fn layers(viewport: Viewport, palette: &ColorPalette, sky_extras: Vec<Element>) -> Element {
    let width = viewport.width as f32;
    let height = viewport.height as f32;

    let stars = STARS.iter().map(|&(x, y, opacity)| {
        circle(x, y, 1.6).fill(palette.stars).opacity(opacity)
    });
    let trees = TREE_LINE
        .iter()
        .enumerate()
        .map(|(i, &(x, h))| tree_silhouette(i, x, h, palette));

    group()
        .class("background")
        .child(sky_gradient(palette))
        .child(rect(0.0, 0.0, width, height).attr("fill", format!("url(#{SKY_GRADIENT_ID})")))
        .child(group().class("stars").children(stars))
        .children(sky_extras)
        .child(group().class("tree-line").children(trees))
        .child(
            rect(0.0, GROUND_TOP, width, (height - GROUND_TOP).max(0.0))
                .class("ground")
                .fill(palette.ground),
        )
        .child(rect(0.0, GROUND_TOP, width, 6.0).fill(palette.ground_accent))
}

/// Daytime clearing: sky gradient, faint stars, tree line, ground.
pub fn forest_background(viewport: Viewport, palette: &ColorPalette) -> Element {
    layers(viewport, palette, Vec::new())
}

/// The forest clearing with a moon hung over the tree line.
pub fn night_background(viewport: Viewport, palette: &ColorPalette) -> Element {
    let moon = group()
        .class("moon")
        .child(circle(1020.0, 90.0, 38.0).fill(palette.stars))
        .child(ellipse(1008.0, 80.0, 7.0, 5.0).fill(palette.sky[2]).opacity(0.3))
        .child(ellipse(1032.0, 104.0, 5.0, 4.0).fill(palette.sky[2]).opacity(0.3));
    layers(viewport, palette, vec![moon])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> Element {
        forest_background(Viewport::new(800, 600), &ColorPalette::SUNNY_GROVE)
    }

    #[test]
    fn sky_fills_the_viewport() {
        let bg = render();
        let sky = bg
            .descendants()
            .into_iter()
            .find(|e| e.get_attr("fill") == Some("url(#sky-gradient)"))
            .unwrap();
        assert_eq!(sky.get_attr("width"), Some("800"));
        assert_eq!(sky.get_attr("height"), Some("600"));
    }

    #[test]
    fn gradient_has_three_palette_stops() {
        let bg = render();
        let stops: Vec<&str> = bg
            .descendants()
            .into_iter()
            .filter(|e| e.name() == "stop")
            .filter_map(|e| e.get_attr("stop-color"))
            .collect();
        assert_eq!(stops, vec!["#7DD3FC", "#BAE6FD", "#FEF3C7"]);
    }

    #[test]
    fn ground_band_sits_at_fixed_offset() {
        let bg = render();
        let ground = &bg.find_by_class("ground")[0];
        assert_eq!(ground.get_attr("y"), Some("520"));
        assert_eq!(ground.get_attr("height"), Some("80"));
    }

    #[test]
    fn short_viewport_collapses_ground_band() {
        let bg = forest_background(Viewport::new(300, 200), &ColorPalette::SUNNY_GROVE);
        let ground = &bg.find_by_class("ground")[0];
        assert_eq!(ground.get_attr("height"), Some("0"));
    }

    #[test]
    fn every_star_and_tree_is_drawn() {
        let bg = render();
        assert_eq!(bg.find_by_class("stars")[0].elements().count(), STARS.len());
        let trees = &bg.find_by_class("tree-line")[0];
        assert_eq!(trees.elements().count(), TREE_LINE.len());
        assert!(
            trees
                .elements()
                .all(|t| t.get_attr("opacity") == Some("0.35"))
        );
    }

    #[test]
    fn only_colors_change_between_palettes() {
        let day = forest_background(Viewport::DEFAULT, &ColorPalette::SUNNY_GROVE);
        let dusk = forest_background(Viewport::DEFAULT, &ColorPalette::AUTUMN_GLADE);
        let shape = |e: &Element| {
            e.descendants()
                .iter()
                .map(|d| (d.name().to_string(), d.get_attr("x").map(str::to_string)))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&day), shape(&dusk));
        assert_ne!(day, dusk);
    }

    #[test]
    fn night_adds_a_moon() {
        let night = night_background(Viewport::DEFAULT, &ColorPalette::MOONLIT_HOLLOW);
        assert_eq!(night.find_by_class("moon").len(), 1);
        assert!(render().find_by_class("moon").is_empty());
    }
}
