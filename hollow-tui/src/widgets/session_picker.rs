//! Session picker widget.
//!
//! Renders the project -> branch -> session tree. Selection moves over
//! sessions only; project and branch rows are headers.

use chrono::Local;
use hollow_protocol::{ProjectGroup, SessionListEntry};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;

#[derive(Debug, Clone, Default)]
pub struct SessionPickerWidget {
    pub groups: Vec<ProjectGroup>,
    /// Index into the flattened session list.
    pub selected: usize,
    /// First visible row.
    pub scroll_offset: usize,
    pub focused: bool,
}

enum Row<'a> {
    Project(&'a ProjectGroup),
    Branch {
        name: &'a str,
        worktree: Option<&'a str>,
    },
    Session(&'a SessionListEntry),
}

impl SessionPickerWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: Vec<ProjectGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    /// Replace the tree, keeping the selection in range.
    pub fn set_groups(&mut self, groups: Vec<ProjectGroup>) {
        self.groups = groups;
        let count = self.session_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn session_count(&self) -> usize {
        self.groups.iter().map(ProjectGroup::session_count).sum()
    }

    fn sessions(&self) -> impl Iterator<Item = &SessionListEntry> {
        self.groups
            .iter()
            .flat_map(|p| p.branches.iter())
            .flat_map(|b| b.sessions.iter())
    }

    fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        for project in &self.groups {
            rows.push(Row::Project(project));
            for branch in &project.branches {
                rows.push(Row::Branch {
                    name: &branch.branch,
                    worktree: branch.worktree_path.as_deref(),
                });
                rows.extend(branch.sessions.iter().map(Row::Session));
            }
        }
        rows
    }

    /// Moves selection to the next session, wrapping at the end.
    pub fn select_next(&mut self) {
        let count = self.session_count();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Moves selection to the previous session, wrapping at the start.
    pub fn select_prev(&mut self) {
        let count = self.session_count();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    pub fn selected_session(&self) -> Option<&SessionListEntry> {
        self.sessions().nth(self.selected)
    }

    /// Row index of the selected session within the rendered tree.
    fn selected_row(&self) -> Option<usize> {
        self.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, Row::Session(_)))
            .nth(self.selected)
            .map(|(i, _)| i)
    }

    /// Adjust the scroll offset so the selected session is visible.
    pub fn ensure_visible(&mut self, visible_height: usize) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if visible_height == 0 {
            return;
        }
        if row >= self.scroll_offset + visible_height {
            self.scroll_offset = row - visible_height + 1;
        }
        if row < self.scroll_offset {
            self.scroll_offset = row;
        }
    }

    pub fn to_list(&self, theme: &Theme) -> List<'_> {
        let items: Vec<ListItem> = if self.groups.is_empty() {
            vec![ListItem::new(Line::from(Span::styled("No sessions", theme.dim)))]
        } else {
            let selected = self.selected_row();
            self.rows()
                .into_iter()
                .enumerate()
                .skip(self.scroll_offset)
                .map(|(i, row)| row_to_item(row, self.focused && Some(i) == selected, theme))
                .collect()
        };

        let border = if self.focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .title(" Sessions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        List::new(items).block(block)
    }
}

fn row_to_item<'a>(row: Row<'a>, selected: bool, theme: &Theme) -> ListItem<'a> {
    let line = match row {
        Row::Project(project) => Line::from(vec![
            Span::styled(project.project_name.as_str(), theme.bold),
            Span::styled(format!("  {}", project.project_path), theme.dim),
        ]),
        Row::Branch { name, worktree } => {
            let mut spans = vec![Span::styled(
                format!("  ⎇ {name}"),
                Style::default().fg(theme.accent),
            )];
            if let Some(worktree) = worktree {
                spans.push(Span::styled(format!("  {worktree}"), theme.dim));
            }
            Line::from(spans)
        }
        Row::Session(session) => {
            let style = if selected {
                Style::default().bg(theme.selection).fg(theme.fg)
            } else {
                Style::default().fg(theme.fg)
            };
            let bullet = if session.is_current { "●" } else { "○" };
            let agents = if session.agent_count == 1 {
                "1 agent".to_string()
            } else {
                format!("{} agents", session.agent_count)
            };
            let when = session.last_activity.with_timezone(&Local).format("%m-%d %H:%M");

            let mut spans = vec![
                Span::styled(format!("    {bullet} "), Style::default().fg(theme.working)),
                Span::styled(
                    format!("{:<16} ", session.slug),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{agents:<9} "), style),
                Span::styled(when.to_string(), theme.dim),
            ];
            if session.waiting_for_input {
                spans.push(Span::styled(
                    "  needs input",
                    Style::default().fg(theme.waiting(&hollow_scene::style_for(None))),
                ));
            }
            Line::from(spans)
        }
    };
    ListItem::new(line)
}
