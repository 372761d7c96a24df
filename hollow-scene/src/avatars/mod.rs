//! Animal avatars.
//!
//! Each animal is a fixed base drawing plus a table of accessories that
//! unlock as the avatar's stage grows. Drawings use local coordinates with
//! the feet on `y = 0`, centred on `x = 0`.

mod bear;
mod chipmunk;
mod fox;
mod mouse;
mod owl;
mod rabbit;
mod squirrel;
mod woodpecker;

use std::fmt;

use hollow_protocol::AgentState;
use serde::{Deserialize, Serialize};

use crate::svg::{Element, circle, ellipse, group};
use crate::{Color, Point};

/// Highest stage any accessory is gated on.
pub const MAX_STAGE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animal {
    Fox,
    Owl,
    Bear,
    Rabbit,
    Chipmunk,
    Squirrel,
    Mouse,
    Woodpecker,
}

impl Animal {
    pub const ALL: [Animal; 8] = [
        Animal::Fox,
        Animal::Owl,
        Animal::Bear,
        Animal::Rabbit,
        Animal::Chipmunk,
        Animal::Squirrel,
        Animal::Mouse,
        Animal::Woodpecker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Fox => "fox",
            Animal::Owl => "owl",
            Animal::Bear => "bear",
            Animal::Rabbit => "rabbit",
            Animal::Chipmunk => "chipmunk",
            Animal::Squirrel => "squirrel",
            Animal::Mouse => "mouse",
            Animal::Woodpecker => "woodpecker",
        }
    }

    pub fn spec(&self) -> &'static AvatarSpec {
        match self {
            Animal::Fox => &fox::SPEC,
            Animal::Owl => &owl::SPEC,
            Animal::Bear => &bear::SPEC,
            Animal::Rabbit => &rabbit::SPEC,
            Animal::Chipmunk => &chipmunk::SPEC,
            Animal::Squirrel => &squirrel::SPEC,
            Animal::Mouse => &mouse::SPEC,
            Animal::Woodpecker => &woodpecker::SPEC,
        }
    }

    /// Stable animal for an agent id (FNV-1a).
    pub fn for_agent(id: &str) -> Animal {
        let mut hash: u64 = 1469598103934665603;
        for b in id.as_bytes() {
            hash ^= *b as u64;
            hash = hash.wrapping_mul(1099511628211);
        }
        Self::ALL[(hash % Self::ALL.len() as u64) as usize]
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer drawn on top of the base once `stage >= min_stage`.
#[derive(Debug, Clone, Copy)]
pub struct Accessory {
    pub name: &'static str,
    pub min_stage: u32,
    pub draw: fn() -> Element,
}

/// Everything needed to draw one animal.
#[derive(Debug)]
pub struct AvatarSpec {
    pub animal: Animal,
    pub base: fn() -> Element,
    pub accessories: &'static [Accessory],
}

impl AvatarSpec {
    /// Accessories unlocked at `stage`, in table order.
    pub fn active(&self, stage: u32) -> impl Iterator<Item = &Accessory> {
        self.accessories.iter().filter(move |a| stage >= a.min_stage)
    }
}

/// Map completed tasks to an avatar stage.
pub fn stage_for_tasks(tasks_completed: u32) -> u32 {
    match tasks_completed {
        0..=2 => 1,
        3..=7 => 2,
        _ => 3,
    }
}

/// An animal at a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub animal: Animal,
    pub stage: u32,
}

impl Avatar {
    pub fn new(animal: Animal, stage: u32) -> Self {
        Self { animal, stage }
    }

    pub fn for_agent(agent: &AgentState) -> Self {
        Self::new(
            Animal::for_agent(&agent.id),
            stage_for_tasks(agent.tasks_completed),
        )
    }

    /// Names of the accessory layers drawn at this stage.
    pub fn layers(&self) -> Vec<&'static str> {
        self.animal.spec().active(self.stage).map(|a| a.name).collect()
    }

    pub fn render(&self, at: Point) -> Element {
        let spec = self.animal.spec();
        group()
            .class(format!("avatar avatar-{}", self.animal))
            .translate(at)
            .attr("data-stage", self.stage)
            .child((spec.base)().class("base"))
            .children(
                spec.active(self.stage)
                    .map(|a| (a.draw)().class(format!("accessory accessory-{}", a.name))),
            )
    }
}

// Shared shapes for the animal drawings.

/// Round body sitting on the ground line.
fn body(fur: Color, belly: Color) -> Element {
    group()
        .child(ellipse(0.0, -22.0, 20.0, 22.0).fill(fur))
        .child(ellipse(0.0, -18.0, 12.0, 14.0).fill(belly))
}

fn head(fur: Color, cy: f32, r: f32) -> Element {
    circle(0.0, cy, r).fill(fur)
}

fn eyes(cy: f32, spread: f32) -> Element {
    let ink = Color::hex(0x1C1917);
    group()
        .child(circle(-spread, cy, 2.5).fill(ink))
        .child(circle(spread, cy, 2.5).fill(ink))
}
