use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, ellipse, group, path, rect};

const FUR: Color = Color::hex(0x78350F);
const MUZZLE: Color = Color::hex(0xD6A56C);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Bear,
    base,
    accessories: &[
        Accessory {
            name: "hard_hat",
            min_stage: 2,
            draw: hard_hat,
        },
        Accessory {
            name: "tool_belt",
            min_stage: 3,
            draw: tool_belt,
        },
    ],
};

fn base() -> Element {
    group()
        .child(body(FUR, MUZZLE).attr("transform", "scale(1.15)"))
        .child(circle(-15.0, -76.0, 7.0).fill(FUR))
        .child(circle(15.0, -76.0, 7.0).fill(FUR))
        .child(head(FUR, -62.0, 19.0))
        .child(ellipse(0.0, -55.0, 9.0, 7.0).fill(MUZZLE))
        .child(eyes(-66.0, 7.0))
        .child(circle(0.0, -57.0, 3.0).fill(Color::hex(0x1C1917)))
}

fn hard_hat() -> Element {
    let shell = Color::hex(0xFACC15);
    group()
        .child(path("M -18 -74 Q 0 -100 18 -74 Z").fill(shell))
        .child(rect(-22.0, -76.0, 44.0, 4.0).attr("rx", 2).fill(shell))
}

fn tool_belt() -> Element {
    let leather = Color::hex(0x451A03);
    group()
        .child(rect(-23.0, -20.0, 46.0, 6.0).fill(leather))
        .child(rect(10.0, -18.0, 4.0, 12.0).fill(Color::hex(0x9CA3AF)))
}
