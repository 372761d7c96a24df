use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, ellipse, group, rect};

const FUR: Color = Color::hex(0xB45309);
const STRIPE: Color = Color::hex(0x451A03);
const CREAM: Color = Color::hex(0xFEF3C7);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Chipmunk,
    base,
    accessories: &[
        Accessory {
            name: "acorn_pouch",
            min_stage: 2,
            draw: acorn_pouch,
        },
        Accessory {
            name: "headlamp",
            min_stage: 3,
            draw: headlamp,
        },
    ],
};

fn base() -> Element {
    group()
        .child(body(FUR, CREAM))
        .child(rect(-2.0, -42.0, 4.0, 30.0).attr("rx", 2).fill(STRIPE))
        .child(circle(-12.0, -70.0, 5.0).fill(FUR))
        .child(circle(12.0, -70.0, 5.0).fill(FUR))
        .child(head(FUR, -56.0, 16.0))
        .child(ellipse(-9.0, -50.0, 6.0, 5.0).fill(CREAM))
        .child(ellipse(9.0, -50.0, 6.0, 5.0).fill(CREAM))
        .child(eyes(-59.0, 6.0))
}

fn acorn_pouch() -> Element {
    group()
        .child(ellipse(-18.0, -16.0, 7.0, 8.0).fill(Color::hex(0x65A30D)))
        .child(ellipse(-18.0, -22.0, 3.0, 3.5).fill(Color::hex(0x92400E)))
}

fn headlamp() -> Element {
    group()
        .child(rect(-16.0, -66.0, 32.0, 3.0).fill(Color::hex(0x1C1917)))
        .child(circle(0.0, -65.0, 4.0).fill(Color::hex(0xFEF08A)))
}
