use crate::svg::{Element, circle, group, path, rect};
use crate::{Color, Point, pick};

const CAP: [Color; 4] = [
    Color::hex(0xDC2626),
    Color::hex(0xEA580C),
    Color::hex(0x9333EA),
    Color::hex(0x92400E),
];
const SCALE: [f32; 4] = [1.0, 0.8, 1.2, 0.9];
const STEM: Color = Color::hex(0xFEF3C7);
const SPOT: Color = Color::hex(0xFFFFFF);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MushroomStyle {
    pub cap: Color,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mushroom {
    pub variant: u32,
}

impl Mushroom {
    pub const VARIANTS: u32 = CAP.len() as u32;

    pub fn style(&self) -> MushroomStyle {
        MushroomStyle {
            cap: pick(&CAP, self.variant),
            scale: pick(&SCALE, self.variant),
        }
    }

    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        group()
            .class("decoration mushroom")
            .translate(at)
            .child(
                group()
                    .attr("transform", format!("scale({})", style.scale))
                    .child(rect(-4.0, -14.0, 8.0, 14.0).attr("rx", 3).fill(STEM))
                    .child(path("M -14 -12 Q 0 -34 14 -12 Z").fill(style.cap))
                    .child(circle(-5.0, -20.0, 2.5).fill(SPOT))
                    .child(circle(5.0, -17.0, 2.0).fill(SPOT)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_color_comes_from_table() {
        assert_eq!(Mushroom { variant: 2 }.style().cap, Color::hex(0x9333EA));
        assert_eq!(Mushroom { variant: 6 }.style().cap, Color::hex(0x9333EA));
    }

    #[test]
    fn renders_cap_with_style_color() {
        let el = Mushroom { variant: 1 }.render(Point::new(0.0, 0.0));
        assert!(
            el.descendants()
                .iter()
                .any(|e| e.name() == "path" && e.get_attr("fill") == Some("#EA580C"))
        );
    }
}
