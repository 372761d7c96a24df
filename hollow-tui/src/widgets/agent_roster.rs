//! Agent roster: one row per agent with its activity.

use hollow_protocol::AgentState;
use hollow_scene::{Activity, Avatar};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;

#[derive(Debug, Clone, Default)]
pub struct AgentRosterWidget {
    pub agents: Vec<AgentState>,
    pub selected: usize,
    pub focused: bool,
}

impl AgentRosterWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the agents, keeping the selection in range.
    pub fn set_agents(&mut self, agents: Vec<AgentState>) {
        self.agents = agents;
        if self.selected >= self.agents.len() {
            self.selected = self.agents.len().saturating_sub(1);
        }
    }

    /// Moves selection to the next agent, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.agents.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.agents.len();
    }

    /// Moves selection to the previous agent, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.agents.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.agents.len() - 1);
    }

    pub fn selected_agent(&self) -> Option<&AgentState> {
        self.agents.get(self.selected)
    }

    pub fn to_list(&self, theme: &Theme) -> List<'_> {
        let items: Vec<ListItem> = if self.agents.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No agents yet",
                theme.dim,
            )))]
        } else {
            self.agents
                .iter()
                .enumerate()
                .map(|(i, agent)| agent_to_item(agent, self.focused && i == self.selected, theme))
                .collect()
        };

        let border = if self.focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .title(format!(" Team ({}) ", self.agents.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        List::new(items).block(block)
    }
}

fn activity_glyph(activity: &Activity, theme: &Theme) -> (&'static str, ratatui::style::Color) {
    match activity {
        Activity::Waiting(style) => (style.icon, theme.waiting(style)),
        Activity::Compacting => ("✦", theme.compacting),
        Activity::Working => ("●", theme.working),
        Activity::Idle => ("○", theme.idle),
        Activity::Done => ("✔", theme.done),
    }
}

fn agent_to_item<'a>(agent: &'a AgentState, selected: bool, theme: &Theme) -> ListItem<'a> {
    let activity = Activity::of(agent);
    let (glyph, color) = activity_glyph(&activity, theme);
    let avatar = Avatar::for_agent(agent);

    let style = if selected {
        Style::default().bg(theme.selection).fg(theme.fg)
    } else {
        Style::default().fg(theme.fg)
    };
    let detail = match activity {
        Activity::Waiting(style) => style.label,
        _ => agent.current_action.as_deref().unwrap_or(activity.label()),
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(color)),
        Span::styled(format!("{:<10} ", agent.name), style.add_modifier(Modifier::BOLD)),
        Span::styled(format!("{:<11} ", agent.role.as_str()), style),
        Span::styled(
            format!("{}·{} ", avatar.animal, avatar.stage),
            Style::default().fg(theme.accent),
        ),
        Span::styled(detail, Style::default().fg(color)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hollow_protocol::{AgentRole, AgentStatus, WaitingType};
    use ratatui::{Terminal, backend::TestBackend};

    fn agent(id: &str, name: &str) -> AgentState {
        AgentState::new(id, name, AgentRole::Implementer)
    }

    fn render(widget: &AgentRosterWidget) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|f| f.render_widget(widget.to_list(&theme), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn select_wraps_both_ways() {
        let mut widget = AgentRosterWidget::new();
        widget.set_agents(vec![agent("a", "Hazel"), agent("b", "Bramble")]);
        widget.select_prev();
        assert_eq!(widget.selected, 1);
        widget.select_next();
        assert_eq!(widget.selected, 0);
    }

    #[test]
    fn select_does_nothing_on_empty() {
        let mut widget = AgentRosterWidget::new();
        widget.select_next();
        widget.select_prev();
        assert_eq!(widget.selected, 0);
        assert!(widget.selected_agent().is_none());
    }

    #[test]
    fn set_agents_clamps_selection() {
        let mut widget = AgentRosterWidget::new();
        widget.set_agents(vec![agent("a", "A"), agent("b", "B"), agent("c", "C")]);
        widget.selected = 2;
        widget.set_agents(vec![agent("a", "A")]);
        assert_eq!(widget.selected, 0);
        assert_eq!(widget.selected_agent().unwrap().id, "a");
    }

    #[test]
    fn renders_names_and_actions() {
        let mut hazel = agent("a", "Hazel");
        hazel.status = AgentStatus::Working;
        hazel.current_action = Some("Editing lib.rs".into());
        let mut widget = AgentRosterWidget::new();
        widget.set_agents(vec![hazel]);

        let content = render(&widget);
        assert!(content.contains("Hazel"));
        assert!(content.contains("implementer"));
        assert!(content.contains("Editing lib.rs"));
        assert!(content.contains("Team (1)"));
    }

    #[test]
    fn waiting_agent_shows_its_label() {
        let mut bramble = agent("b", "Bramble");
        bramble.waiting_for_input = true;
        bramble.waiting_type = Some(WaitingType::Question);
        let mut widget = AgentRosterWidget::new();
        widget.set_agents(vec![bramble]);

        assert!(render(&widget).contains("Has a question"));
    }

    #[test]
    fn renders_empty_state_message() {
        assert!(render(&AgentRosterWidget::new()).contains("No agents yet"));
    }
}
