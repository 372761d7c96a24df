//! Status styling for agents.

use hollow_protocol::{AgentState, AgentStatus, WaitingType};

use crate::Color;

/// Icon, label and accent color shown while an agent waits on the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingStyle {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const DEFAULT_STYLE: WaitingStyle = WaitingStyle {
    icon: "✋",
    label: "Needs your input!",
    color: Color::hex(0xEAB308),
};

const STYLES: [(WaitingType, WaitingStyle); 4] = [
    (
        WaitingType::Permission,
        WaitingStyle {
            icon: "🔐",
            label: "Needs permission",
            color: Color::hex(0xF97316),
        },
    ),
    (
        WaitingType::Question,
        WaitingStyle {
            icon: "❓",
            label: "Has a question",
            color: Color::hex(0x3B82F6),
        },
    ),
    (
        WaitingType::Plan,
        WaitingStyle {
            icon: "📋",
            label: "Plan ready for review",
            color: Color::hex(0x8B5CF6),
        },
    ),
    (
        WaitingType::PlanApproval,
        WaitingStyle {
            icon: "📝",
            label: "Waiting for plan approval",
            color: Color::hex(0x10B981),
        },
    ),
];

/// Look up the waiting style; `None` and unrecognized types get the default.
pub fn style_for(waiting: Option<&WaitingType>) -> WaitingStyle {
    waiting
        .and_then(|w| STYLES.iter().find(|(t, _)| t == w))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Color of the ring drawn around a waiting agent.
pub fn ring_color_for(waiting: Option<&WaitingType>) -> Color {
    style_for(waiting).color
}

/// True while a working agent is compacting its context.
pub fn is_compacting(agent: &AgentState) -> bool {
    agent.status == AgentStatus::Working
        && agent
            .current_action
            .as_deref()
            .is_some_and(|action| action.contains("Compacting"))
}

/// What the scene draws for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Waiting(WaitingStyle),
    Compacting,
    Working,
    Idle,
    Done,
}

impl Activity {
    /// Classify an agent. Waiting on the user wins over every status.
    pub fn of(agent: &AgentState) -> Self {
        if agent.waiting_for_input {
            return Activity::Waiting(style_for(agent.waiting_type.as_ref()));
        }
        if is_compacting(agent) {
            return Activity::Compacting;
        }
        match agent.status {
            AgentStatus::Working => Activity::Working,
            AgentStatus::Idle => Activity::Idle,
            AgentStatus::Done => Activity::Done,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activity::Waiting(style) => style.label,
            Activity::Compacting => "Compacting",
            Activity::Working => "Working",
            Activity::Idle => "Idle",
            Activity::Done => "Done",
        }
    }
}
