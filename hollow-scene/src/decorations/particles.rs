//! Status effects drawn above an agent's workstation.

use crate::svg::{Element, circle, group, line, path, polygon};
use crate::{Color, Point, pick};

const STEAM_OPACITY: [f32; 3] = [0.7, 0.55, 0.4];
const STEAM_DRIFT: [f32; 3] = [0.0, 6.0, -6.0];
const STEAM: Color = Color::hex(0xF1F5F9);

/// Rising puffs over a busy workstation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SteamPuff {
    pub variant: u32,
}

impl SteamPuff {
    pub const VARIANTS: u32 = STEAM_OPACITY.len() as u32;

    /// (opacity, horizontal drift)
    pub fn style(&self) -> (f32, f32) {
        (
            pick(&STEAM_OPACITY, self.variant),
            pick(&STEAM_DRIFT, self.variant),
        )
    }

    pub fn render(&self, at: Point) -> Element {
        let (opacity, drift) = self.style();
        group()
            .class("effect steam")
            .translate(at)
            .opacity(opacity)
            .child(circle(0.0, 0.0, 6.0).fill(STEAM))
            .child(circle(drift * 0.5, -12.0, 8.0).fill(STEAM))
            .child(circle(drift, -26.0, 10.0).fill(STEAM))
    }
}

const SPARK: [Color; 4] = [
    Color::hex(0xFDE047),
    Color::hex(0xFB923C),
    Color::hex(0xF472B6),
    Color::hex(0x67E8F9),
];
const SPARK_SIZE: [f32; 4] = [6.0, 4.5, 5.0, 7.0];

/// Four-pointed sparks around an agent that is compacting its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spark {
    pub variant: u32,
}

impl Spark {
    pub const VARIANTS: u32 = SPARK.len() as u32;

    /// (color, size)
    pub fn style(&self) -> (Color, f32) {
        (pick(&SPARK, self.variant), pick(&SPARK_SIZE, self.variant))
    }

    pub fn render(&self, at: Point) -> Element {
        let (color, size) = self.style();
        let thin = size * 0.3;
        group().class("effect spark").translate(at).child(
            polygon(&[
                (0.0, -size),
                (thin, -thin),
                (size, 0.0),
                (thin, thin),
                (0.0, size),
                (-thin, thin),
                (-size, 0.0),
                (-thin, -thin),
            ])
            .fill(color),
        )
    }
}

const BURST: [Color; 3] = [
    Color::hex(0x22C55E),
    Color::hex(0x16A34A),
    Color::hex(0x4ADE80),
];
const BURST_RAYS: [u32; 3] = [8, 6, 10];

/// A check mark with radiating rays for a finished agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckmarkBurst {
    pub variant: u32,
}

impl CheckmarkBurst {
    pub const VARIANTS: u32 = BURST.len() as u32;

    /// (color, ray count)
    pub fn style(&self) -> (Color, u32) {
        (pick(&BURST, self.variant), pick(&BURST_RAYS, self.variant))
    }

    pub fn render(&self, at: Point) -> Element {
        let (color, rays) = self.style();
        let step = std::f32::consts::TAU / rays as f32;
        let ray = |i: u32| {
            let angle = step * i as f32;
            let (sin, cos) = angle.sin_cos();
            line(cos * 16.0, sin * 16.0, cos * 22.0, sin * 22.0)
                .stroke(color, 2.0)
                .attr("stroke-linecap", "round")
        };
        group()
            .class("effect checkmark")
            .translate(at)
            .children((0..rays).map(ray))
            .child(circle(0.0, 0.0, 12.0).fill(color))
            .child(
                path("M -5 0 L -1 4 L 6 -4")
                    .attr("fill", "none")
                    .stroke(Color::hex(0xFFFFFF), 2.5),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_is_periodic() {
        for v in 0..9 {
            assert_eq!(
                SteamPuff { variant: v }.style(),
                SteamPuff { variant: v + SteamPuff::VARIANTS }.style()
            );
        }
    }

    #[test]
    fn spark_color_and_size_share_an_index() {
        assert_eq!(Spark { variant: 3 }.style(), (Color::hex(0x67E8F9), 7.0));
        assert_eq!(Spark { variant: 7 }.style(), (Color::hex(0x67E8F9), 7.0));
    }

    #[test]
    fn burst_draws_one_line_per_ray() {
        for variant in 0..CheckmarkBurst::VARIANTS {
            let burst = CheckmarkBurst { variant };
            let (_, rays) = burst.style();
            let lines = burst
                .render(Point::new(0.0, 0.0))
                .elements()
                .filter(|e| e.name() == "line")
                .count();
            assert_eq!(lines, rays as usize);
        }
    }

    #[test]
    fn effects_carry_their_class() {
        let at = Point::new(1.0, 2.0);
        assert_eq!(
            SteamPuff::default().render(at).get_attr("class"),
            Some("effect steam")
        );
        assert_eq!(Spark::default().render(at).get_attr("class"), Some("effect spark"));
        assert_eq!(
            CheckmarkBurst::default().render(at).get_attr("class"),
            Some("effect checkmark")
        );
    }
}
