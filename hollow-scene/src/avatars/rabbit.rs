use super::{Accessory, Animal, AvatarSpec, body, eyes, head};
use crate::Color;
use crate::svg::{Element, circle, ellipse, group, line, polygon, rect};

const FUR: Color = Color::hex(0xE7E5E4);
const PINK: Color = Color::hex(0xFBCFE8);

pub(super) const SPEC: AvatarSpec = AvatarSpec {
    animal: Animal::Rabbit,
    base,
    accessories: &[
        Accessory {
            name: "bow_tie",
            min_stage: 2,
            draw: bow_tie,
        },
        Accessory {
            name: "stopwatch",
            min_stage: 3,
            draw: stopwatch,
        },
    ],
};

fn base() -> Element {
    group()
        .child(circle(18.0, -10.0, 6.0).fill(Color::hex(0xFFFFFF)))
        .child(body(FUR, Color::hex(0xFFFFFF)))
        .child(ellipse(-7.0, -86.0, 5.0, 18.0).fill(FUR))
        .child(ellipse(7.0, -86.0, 5.0, 18.0).fill(FUR))
        .child(ellipse(-7.0, -86.0, 2.5, 13.0).fill(PINK))
        .child(ellipse(7.0, -86.0, 2.5, 13.0).fill(PINK))
        .child(head(FUR, -58.0, 16.0))
        .child(eyes(-60.0, 6.0))
        .child(circle(0.0, -53.0, 2.0).fill(PINK))
}

fn bow_tie() -> Element {
    let red = Color::hex(0xDC2626);
    group()
        .child(polygon(&[(0.0, -42.0), (-9.0, -47.0), (-9.0, -37.0)]).fill(red))
        .child(polygon(&[(0.0, -42.0), (9.0, -47.0), (9.0, -37.0)]).fill(red))
        .child(circle(0.0, -42.0, 2.0).fill(red))
}

fn stopwatch() -> Element {
    let gold = Color::hex(0xCA8A04);
    group()
        .child(rect(-22.0, -36.0, 3.0, 4.0).fill(gold))
        .child(circle(-20.5, -26.0, 8.0).fill(Color::hex(0xFFFFFF)).stroke(gold, 2.0))
        .child(line(-20.5, -26.0, -20.5, -31.0).stroke(Color::hex(0x1C1917), 1.0))
}
