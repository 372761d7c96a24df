use crate::svg::{Element, group, path};
use crate::{Color, Point, pick};

const WATER: [Color; 3] = [
    Color::hex(0x38BDF8),
    Color::hex(0x0EA5E9),
    Color::hex(0x7DD3FC),
];
const WIDTH: [f32; 3] = [18.0, 24.0, 14.0];
const FOAM: Color = Color::hex(0xE0F2FE);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamStyle {
    pub water: Color,
    pub width: f32,
}

/// A winding stream crossing the ground band from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stream {
    pub variant: u32,
}

impl Stream {
    pub const VARIANTS: u32 = WATER.len() as u32;

    pub fn style(&self) -> StreamStyle {
        StreamStyle {
            water: pick(&WATER, self.variant),
            width: pick(&WIDTH, self.variant),
        }
    }

    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        let course = "M 0 0 C 60 -20 120 20 180 0 S 300 -20 360 0";
        group()
            .class("decoration stream")
            .translate(at)
            .child(
                path(course)
                    .attr("fill", "none")
                    .stroke(style.water, style.width)
                    .attr("stroke-linecap", "round"),
            )
            .child(
                path(course)
                    .attr("fill", "none")
                    .stroke(FOAM, 2.0)
                    .attr("stroke-dasharray", "6 14")
                    .opacity(0.8),
            )
    }
}
