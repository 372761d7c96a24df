use crate::svg::{Element, circle, group, rect};
use crate::{Color, Point, pick};

const CANOPY: [Color; 4] = [
    Color::hex(0x2F855A),
    Color::hex(0x38A169),
    Color::hex(0x276749),
    Color::hex(0x48BB78),
];
const SCALE: [f32; 4] = [1.0, 0.85, 1.15, 0.95];
const TRUNK: Color = Color::hex(0x744210);

/// Derived look of a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeStyle {
    pub canopy: Color,
    pub scale: f32,
}

/// A round-canopy foreground tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tree {
    pub variant: u32,
}

impl Tree {
    pub const VARIANTS: u32 = CANOPY.len() as u32;

    pub fn style(&self) -> TreeStyle {
        TreeStyle {
            canopy: pick(&CANOPY, self.variant),
            scale: pick(&SCALE, self.variant),
        }
    }

    /// Drawn with the trunk base at `at`.
    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        let shade = style.canopy.mix(Color::hex(0x000000), 0.2);
        group()
            .class("decoration tree")
            .translate(at)
            .child(
                group()
                    .attr("transform", format!("scale({})", style.scale))
                    .child(rect(-8.0, -60.0, 16.0, 60.0).fill(TRUNK))
                    .child(circle(0.0, -90.0, 42.0).fill(style.canopy))
                    .child(circle(-26.0, -70.0, 26.0).fill(shade))
                    .child(circle(24.0, -72.0, 28.0).fill(style.canopy)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_periodic() {
        for v in 0..20 {
            let a = Tree { variant: v }.style();
            let b = Tree { variant: v + Tree::VARIANTS }.style();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn default_variant_uses_first_entries() {
        let style = Tree::default().style();
        assert_eq!(style.canopy, CANOPY[0]);
        assert_eq!(style.scale, 1.0);
    }

    #[test]
    fn scale_is_applied() {
        let el = Tree { variant: 2 }.render(Point::new(0.0, 0.0));
        let inner = el.elements().next().unwrap();
        assert_eq!(inner.get_attr("transform"), Some("scale(1.15)"));
    }
}
