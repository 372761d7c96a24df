use super::{Accessory, Animal, AvatarSpec, eyes};
use crate::Color;
use crate::svg::{Element, circle, ellipse, group, polygon, rect};

const FEATHER: Color = Color::hex(0x92400E);
const BREAST: Color = Color::hex(0xFDE68A);
const BEAK: Color = Color::hex(0xF59E0B);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Owl,
    base,
    accessories: &[
        Accessory {
            name: "spectacles",
            min_stage: 2,
            draw: spectacles,
        },
        Accessory {
            name: "book",
            min_stage: 3,
            draw: book,
        },
        Accessory {
            name: "mortarboard",
            min_stage: 3,
            draw: mortarboard,
        },
    ],
};

fn base() -> Element {
    group()
        .child(ellipse(0.0, -32.0, 22.0, 32.0).fill(FEATHER))
        .child(ellipse(0.0, -24.0, 14.0, 20.0).fill(BREAST))
        .child(polygon(&[(-18.0, -54.0), (-14.0, -70.0), (-6.0, -58.0)]).fill(FEATHER))
        .child(polygon(&[(18.0, -54.0), (14.0, -70.0), (6.0, -58.0)]).fill(FEATHER))
        .child(circle(-8.0, -48.0, 8.0).fill(Color::hex(0xFFFFFF)))
        .child(circle(8.0, -48.0, 8.0).fill(Color::hex(0xFFFFFF)))
        .child(eyes(-48.0, 8.0))
        .child(polygon(&[(-3.0, -42.0), (3.0, -42.0), (0.0, -36.0)]).fill(BEAK))
}

fn spectacles() -> Element {
    let wire = Color::hex(0x44403C);
    group()
        .child(circle(-8.0, -48.0, 9.0).attr("fill", "none").stroke(wire, 1.5))
        .child(circle(8.0, -48.0, 9.0).attr("fill", "none").stroke(wire, 1.5))
}

fn book() -> Element {
    group()
        .child(rect(-14.0, -22.0, 28.0, 18.0).fill(Color::hex(0x1D4ED8)))
        .child(rect(-1.0, -22.0, 2.0, 18.0).fill(Color::hex(0xFEF3C7)))
}

fn mortarboard() -> Element {
    let cloth = Color::hex(0x1C1917);
    group()
        .child(rect(-10.0, -70.0, 20.0, 6.0).fill(cloth))
        .child(polygon(&[(-20.0, -72.0), (0.0, -80.0), (20.0, -72.0), (0.0, -64.0)]).fill(cloth))
        .child(rect(12.0, -72.0, 2.0, 12.0).fill(BEAK))
}
