use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, group, path, polygon, rect};

const FUR: Color = Color::hex(0xC2410C);
const BELLY: Color = Color::hex(0xFED7AA);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Squirrel,
    base,
    accessories: &[
        Accessory {
            name: "headset",
            min_stage: 2,
            draw: headset,
        },
        Accessory {
            name: "cape",
            min_stage: 3,
            draw: cape,
        },
    ],
};

fn base() -> Element {
    group()
        .child(path("M 14 -8 Q 44 -20 36 -60 Q 30 -80 16 -70 Q 30 -50 12 -24 Z").fill(FUR))
        .child(body(FUR, BELLY))
        .child(polygon(&[(-14.0, -66.0), (-10.0, -80.0), (-4.0, -68.0)]).fill(FUR))
        .child(polygon(&[(14.0, -66.0), (10.0, -80.0), (4.0, -68.0)]).fill(FUR))
        .child(head(FUR, -56.0, 16.0))
        .child(eyes(-58.0, 6.0))
        .child(circle(0.0, -50.0, 2.0).fill(Color::hex(0x1C1917)))
}

fn headset() -> Element {
    let band = Color::hex(0x334155);
    group()
        .child(path("M -16 -58 Q 0 -82 16 -58").attr("fill", "none").stroke(band, 3.0))
        .child(rect(-19.0, -62.0, 5.0, 9.0).fill(band))
        .child(path("M -16 -54 Q -14 -46 -6 -46").attr("fill", "none").stroke(band, 1.5))
}

fn cape() -> Element {
    polygon(&[(-14.0, -44.0), (14.0, -44.0), (22.0, -4.0), (-22.0, -4.0)])
        .fill(Color::hex(0x7C3AED))
        .opacity(0.9)
}
