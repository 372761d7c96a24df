//! Scene composition: background, environment, one station per agent.

use hollow_protocol::{AgentState, WorkshopSnapshot};

use crate::svg::{Element, circle, document, group, rect, text};
use crate::{
    Activity, Avatar, CheckmarkBurst, Color, Point, Spark, SteamPuff, ThemeConfig, Viewport,
    Workstation, ring_color_for,
};

const LABEL_INK: Color = Color::hex(0x1C1917);
const LABEL_PAPER: Color = Color::hex(0xFFFBEB);

/// Draws a [`WorkshopSnapshot`] with one theme at one size.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    theme: &'static ThemeConfig,
    viewport: Viewport,
}

impl Scene {
    pub fn new(theme: &'static ThemeConfig, viewport: Viewport) -> Self {
        Self { theme, viewport }
    }

    pub fn theme(&self) -> &'static ThemeConfig {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Evenly spaced standing spots for `count` agents on the ground line.
    pub fn slots(&self, count: usize) -> Vec<Point> {
        let width = self.viewport.width as f32;
        (0..count)
            .map(|i| {
                let x = width * (i + 1) as f32 / (count + 1) as f32;
                Point::new(x.round(), self.theme.ground_y)
            })
            .collect()
    }

    pub fn render(&self, snapshot: &WorkshopSnapshot) -> Element {
        tracing::debug!(
            theme = self.theme.id,
            agents = snapshot.agents.len(),
            "Rendering scene"
        );
        let stations = snapshot
            .agents
            .iter()
            .zip(self.slots(snapshot.agents.len()))
            .enumerate()
            .map(|(index, (agent, at))| station(agent, index as u32, at));

        document(self.viewport)
            .attr("data-theme", self.theme.id)
            .child(self.theme.render_environment(self.viewport))
            .child(group().class("agents").children(stations))
    }

    pub fn render_svg(&self, snapshot: &WorkshopSnapshot) -> String {
        self.render(snapshot).to_svg_string()
    }
}

fn activity_class(activity: &Activity) -> &'static str {
    match activity {
        Activity::Waiting(_) => "waiting",
        Activity::Compacting => "compacting",
        Activity::Working => "working",
        Activity::Idle => "idle",
        Activity::Done => "done",
    }
}

fn station(agent: &AgentState, index: u32, at: Point) -> Element {
    let activity = Activity::of(agent);
    let avatar = Avatar::for_agent(agent);

    let mut el = group()
        .class(format!("agent {}", activity_class(&activity)))
        .attr("data-agent-id", &agent.id)
        .child(Workstation { variant: index }.render(at.offset(20.0, 0.0)))
        .child(avatar.render(at.offset(-24.0, 6.0)));

    el = match activity {
        Activity::Working => {
            el.child(SteamPuff { variant: index }.render(at.offset(51.0, -90.0)))
        }
        Activity::Compacting => el.children((0..3).map(|i| {
            let offsets = [(-52.0, -70.0), (0.0, -104.0), (8.0, -60.0)];
            let (dx, dy) = offsets[i as usize];
            Spark { variant: index + i }.render(at.offset(dx, dy))
        })),
        Activity::Done => {
            el.child(CheckmarkBurst { variant: index }.render(at.offset(-24.0, -110.0)))
        }
        Activity::Waiting(style) => el
            .child(
                circle(at.x - 24.0, at.y - 34.0, 50.0)
                    .class("waiting-ring")
                    .attr("fill", "none")
                    .stroke(ring_color_for(agent.waiting_type.as_ref()), 4.0)
                    .attr("stroke-dasharray", "10 6"),
            )
            .child(
                group()
                    .class("waiting-badge")
                    .translate(at.offset(-24.0, -112.0))
                    .child(
                        rect(-70.0, -14.0, 140.0, 24.0)
                            .attr("rx", 12)
                            .fill(style.color),
                    )
                    .child(
                        text(0.0, 3.0, format!("{} {}", style.icon, style.label))
                            .attr("text-anchor", "middle")
                            .attr("font-size", 11)
                            .fill(Color::hex(0xFFFFFF)),
                    ),
            ),
        Activity::Idle => el,
    };

    el.child(
        group()
            .class("agent-name")
            .translate(at.offset(-24.0, 30.0))
            .child(rect(-44.0, -12.0, 88.0, 20.0).attr("rx", 6).fill(LABEL_PAPER))
            .child(
                text(0.0, 3.0, agent.name.as_str())
                    .attr("text-anchor", "middle")
                    .attr("font-size", 12)
                    .fill(LABEL_INK),
            ),
    )
}
