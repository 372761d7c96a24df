use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, group, path, rect};

const FUR: Color = Color::hex(0x9CA3AF);
const PINK: Color = Color::hex(0xF9A8D4);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Mouse,
    base,
    accessories: &[
        Accessory {
            name: "pencil",
            min_stage: 2,
            draw: pencil,
        },
        Accessory {
            name: "beret",
            min_stage: 3,
            draw: beret,
        },
    ],
};

fn base() -> Element {
    group()
        .child(path("M 16 -6 Q 36 -2 38 -20").attr("fill", "none").stroke(PINK, 2.0))
        .child(body(FUR, Color::hex(0xE5E7EB)).attr("transform", "scale(0.85)"))
        .child(circle(-13.0, -62.0, 9.0).fill(FUR))
        .child(circle(13.0, -62.0, 9.0).fill(FUR))
        .child(circle(-13.0, -62.0, 5.0).fill(PINK))
        .child(circle(13.0, -62.0, 5.0).fill(PINK))
        .child(head(FUR, -48.0, 14.0))
        .child(eyes(-50.0, 5.0))
        .child(circle(0.0, -43.0, 2.0).fill(PINK))
}

fn pencil() -> Element {
    group()
        .attr("transform", "rotate(-30 -18 -24)")
        .child(rect(-20.0, -40.0, 4.0, 22.0).fill(Color::hex(0xFACC15)))
        .child(rect(-20.0, -18.0, 4.0, 3.0).fill(Color::hex(0x1C1917)))
}

fn beret() -> Element {
    group()
        .child(path("M -14 -58 Q -6 -72 14 -60 Z").fill(Color::hex(0xBE123C)))
        .child(circle(0.0, -66.0, 2.0).fill(Color::hex(0xBE123C)))
}
