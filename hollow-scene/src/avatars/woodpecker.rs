use super::{Accessory, Animal, AvatarSpec, eyes};
use crate::Color;
use crate::svg::{Element, circle, ellipse, group, polygon, rect};

const PLUMAGE: Color = Color::hex(0x1E293B);
const CREST: Color = Color::hex(0xDC2626);
const FACE: Color = Color::hex(0xF8FAFC);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Woodpecker,
    base,
    accessories: &[
        Accessory {
            name: "hammer",
            min_stage: 2,
            draw: hammer,
        },
        Accessory {
            name: "bandana",
            min_stage: 3,
            draw: bandana,
        },
    ],
};

fn base() -> Element {
    group()
        .child(polygon(&[(-10.0, -10.0), (-22.0, 0.0), (-8.0, -2.0)]).fill(PLUMAGE))
        .child(ellipse(0.0, -26.0, 15.0, 26.0).fill(PLUMAGE))
        .child(ellipse(2.0, -22.0, 8.0, 16.0).fill(FACE))
        .child(circle(0.0, -56.0, 13.0).fill(FACE))
        .child(polygon(&[(-10.0, -64.0), (0.0, -78.0), (10.0, -64.0)]).fill(CREST))
        .child(polygon(&[(10.0, -58.0), (28.0, -55.0), (10.0, -52.0)]).fill(Color::hex(0x57534E)))
        .child(eyes(-58.0, 5.0))
}

fn hammer() -> Element {
    group()
        .child(rect(-24.0, -38.0, 3.0, 24.0).fill(Color::hex(0xA16207)))
        .child(rect(-30.0, -42.0, 15.0, 6.0).fill(Color::hex(0x6B7280)))
}

fn bandana() -> Element {
    rect(-13.0, -64.0, 26.0, 5.0).fill(Color::hex(0x2563EB))
}
