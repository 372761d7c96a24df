use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, group, path, polygon, rect};

const FUR: Color = Color::hex(0xEA580C);
const CREAM: Color = Color::hex(0xFFF7ED);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Fox,
    base,
    accessories: &[
        Accessory {
            name: "scarf",
            min_stage: 2,
            draw: scarf,
        },
        Accessory {
            name: "goggles",
            min_stage: 3,
            draw: goggles,
        },
    ],
};

fn base() -> Element {
    group()
        .child(path("M 16 -12 Q 40 -20 34 -44 Q 26 -24 14 -22 Z").fill(FUR))
        .child(circle(33.0, -42.0, 5.0).fill(CREAM))
        .child(body(FUR, CREAM))
        .child(polygon(&[(-18.0, -60.0), (-12.0, -82.0), (-4.0, -64.0)]).fill(FUR))
        .child(polygon(&[(18.0, -60.0), (12.0, -82.0), (4.0, -64.0)]).fill(FUR))
        .child(head(FUR, -58.0, 18.0))
        .child(path("M -12 -54 Q 0 -40 12 -54 Q 0 -48 -12 -54 Z").fill(CREAM))
        .child(eyes(-60.0, 7.0))
        .child(circle(0.0, -50.0, 2.5).fill(Color::hex(0x1C1917)))
}

fn scarf() -> Element {
    let wool = Color::hex(0x16A34A);
    group()
        .child(rect(-16.0, -44.0, 32.0, 7.0).attr("rx", 3).fill(wool))
        .child(rect(6.0, -40.0, 7.0, 16.0).attr("rx", 2).fill(wool))
}

fn goggles() -> Element {
    let rim = Color::hex(0x78716C);
    let lens = Color::hex(0x7DD3FC);
    group()
        .child(rect(-18.0, -71.0, 36.0, 3.0).fill(rim))
        .child(circle(-7.0, -70.0, 5.0).fill(lens).stroke(rim, 2.0))
        .child(circle(7.0, -70.0, 5.0).fill(lens).stroke(rim, 2.0))
}
