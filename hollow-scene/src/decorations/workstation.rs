use crate::svg::{Element, group, rect};
use crate::{Color, Point, pick};

const DESK: [Color; 3] = [
    Color::hex(0xB7791F),
    Color::hex(0x7B341E),
    Color::hex(0xD69E2E),
];
const SCREEN: [Color; 3] = [
    Color::hex(0x1E293B),
    Color::hex(0x134E4A),
    Color::hex(0x312E81),
];
const GLOW: Color = Color::hex(0x5EEAD4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkstationStyle {
    pub desk: Color,
    pub screen: Color,
}

/// A stump desk with a little terminal, drawn behind an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Workstation {
    pub variant: u32,
}

impl Workstation {
    pub const VARIANTS: u32 = DESK.len() as u32;

    pub fn style(&self) -> WorkstationStyle {
        WorkstationStyle {
            desk: pick(&DESK, self.variant),
            screen: pick(&SCREEN, self.variant),
        }
    }

    /// Drawn with the desk legs standing on `at`.
    pub fn render(&self, at: Point) -> Element {
        let style = self.style();
        let leg = style.desk.mix(Color::hex(0x000000), 0.25);
        group()
            .class("decoration workstation")
            .translate(at)
            .child(rect(-52.0, -46.0, 104.0, 10.0).attr("rx", 3).fill(style.desk))
            .child(rect(-46.0, -36.0, 8.0, 36.0).fill(leg))
            .child(rect(38.0, -36.0, 8.0, 36.0).fill(leg))
            .child(rect(14.0, -80.0, 34.0, 26.0).attr("rx", 3).fill(style.screen))
            .child(rect(18.0, -76.0, 26.0, 3.0).fill(GLOW).opacity(0.8))
            .child(rect(18.0, -70.0, 18.0, 3.0).fill(GLOW).opacity(0.6))
            .child(rect(28.0, -54.0, 6.0, 8.0).fill(leg))
    }
}
