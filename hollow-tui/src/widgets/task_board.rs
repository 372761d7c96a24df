//! Task board widget.
//!
//! Lists tasks with a status box, owner, and the ids of any blockers that
//! are still open.

use hollow_protocol::{TaskState, TaskStatus};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;

#[derive(Debug, Clone, Default)]
pub struct TaskBoardWidget {
    pub tasks: Vec<TaskState>,
    pub scroll_offset: usize,
    pub focused: bool,
}

impl TaskBoardWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tasks(&mut self, tasks: Vec<TaskState>) {
        self.tasks = tasks;
        self.scroll_offset = self.scroll_offset.min(self.tasks.len().saturating_sub(1));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.tasks.len() {
            self.scroll_offset += 1;
        }
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let done = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        (done, self.tasks.len())
    }

    pub fn to_list(&self, theme: &Theme) -> List<'_> {
        let items: Vec<ListItem> = if self.tasks.is_empty() {
            vec![ListItem::new(Line::from(Span::styled("No tasks", theme.dim)))]
        } else {
            self.tasks
                .iter()
                .skip(self.scroll_offset)
                .map(|task| self.task_to_item(task, theme))
                .collect()
        };

        let (done, total) = self.progress();
        let border = if self.focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .title(format!(" Tasks {done}/{total} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        List::new(items).block(block)
    }

    fn task_to_item<'a>(&self, task: &'a TaskState, theme: &Theme) -> ListItem<'a> {
        let (mark, color) = match task.status {
            TaskStatus::Pending => ("[ ]", theme.idle),
            TaskStatus::InProgress => ("[~]", theme.working),
            TaskStatus::Completed => ("[x]", theme.done),
        };

        let mut spans = vec![
            Span::styled(format!("{mark} "), Style::default().fg(color)),
            Span::styled(format!("#{:<3} ", task.id), theme.dim),
            Span::styled(task.subject.as_str(), Style::default().fg(theme.fg)),
        ];
        if let Some(owner) = &task.owner {
            spans.push(Span::styled(
                format!("  @{owner}"),
                Style::default().fg(theme.accent),
            ));
        }

        let blockers: Vec<&str> = task
            .open_blockers(&self.tasks)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        if !blockers.is_empty() {
            spans.push(Span::styled(
                format!("  blocked by {}", blockers.join(", ")),
                Style::default()
                    .fg(theme.compacting)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}
