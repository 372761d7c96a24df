use crate::svg::{Element, circle, group, line};
use crate::{Color, Point, pick};

const PETAL: [Color; 5] = [
    Color::hex(0xF472B6),
    Color::hex(0xFACC15),
    Color::hex(0xA78BFA),
    Color::hex(0xFFFFFF),
    Color::hex(0xFB7185),
];
const CENTER: Color = Color::hex(0xF59E0B);
const STEM: Color = Color::hex(0x15803D);

/// Petal offsets around the flower head.
const PETALS: [(f32, f32); 5] = [(0.0, -6.0), (5.7, -1.9), (3.5, 4.9), (-3.5, 4.9), (-5.7, -1.9)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowerStyle {
    pub petal: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flower {
    pub variant: u32,
}

impl Flower {
    pub const VARIANTS: u32 = PETAL.len() as u32;

    pub fn style(&self) -> FlowerStyle {
        FlowerStyle {
            petal: pick(&PETAL, self.variant),
        }
    }

    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        let head = Point::new(0.0, -18.0);
        group()
            .class("decoration flower")
            .translate(at)
            .child(line(0.0, 0.0, head.x, head.y).stroke(STEM, 2.0))
            .children(
                PETALS
                    .iter()
                    .map(|&(dx, dy)| circle(head.x + dx, head.y + dy, 4.0).fill(style.petal)),
            )
            .child(circle(head.x, head.y, 3.0).fill(CENTER))
    }
}
