use crate::svg::{Element, ellipse, group};
use crate::{Color, Point, pick};

const OPACITY: [f32; 3] = [0.9, 0.75, 0.6];
const SCALE: [f32; 3] = [1.0, 0.7, 1.3];
const PUFF: Color = Color::hex(0xFFFFFF);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudStyle {
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cloud {
    pub variant: u32,
}

impl Cloud {
    pub const VARIANTS: u32 = OPACITY.len() as u32;

    pub fn style(&self) -> CloudStyle {
        CloudStyle {
            opacity: pick(&OPACITY, self.variant),
            scale: pick(&SCALE, self.variant),
        }
    }

    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        group()
            .class("decoration cloud")
            .translate(at)
            .opacity(style.opacity)
            .child(
                group()
                    .attr("transform", format!("scale({})", style.scale))
                    .child(ellipse(0.0, 0.0, 46.0, 18.0).fill(PUFF))
                    .child(ellipse(-24.0, -8.0, 24.0, 16.0).fill(PUFF))
                    .child(ellipse(20.0, -12.0, 28.0, 20.0).fill(PUFF)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_follows_variant() {
        let el = Cloud { variant: 4 }.render(Point::new(0.0, 0.0));
        assert_eq!(el.get_attr("opacity"), Some("0.75"));
    }

    #[test]
    fn style_is_periodic() {
        for v in 0..12 {
            assert_eq!(
                Cloud { variant: v }.style(),
                Cloud { variant: v + Cloud::VARIANTS }.style()
            );
        }
    }
}
