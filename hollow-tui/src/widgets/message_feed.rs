//! Message feed widget.
//!
//! Shows inter-agent messages newest first with local time, sender and
//! recipient.

use chrono::Local;
use hollow_protocol::MessageState;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;

#[derive(Debug, Clone, Default)]
pub struct MessageFeedWidget {
    /// Oldest first, as kept by the snapshot.
    pub messages: Vec<MessageState>,
    pub scroll_offset: usize,
    pub focused: bool,
}

impl MessageFeedWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_messages(&mut self, messages: Vec<MessageState>) {
        self.messages = messages;
        self.scroll_offset = self
            .scroll_offset
            .min(self.messages.len().saturating_sub(1));
    }

    /// Scroll towards newer messages.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll towards older messages.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.messages.len() {
            self.scroll_offset += 1;
        }
    }

    pub fn to_list(&self, theme: &Theme) -> List<'_> {
        let items: Vec<ListItem> = if self.messages.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No messages yet",
                theme.dim,
            )))]
        } else {
            self.messages
                .iter()
                .rev()
                .skip(self.scroll_offset)
                .map(|message| message_to_item(message, theme))
                .collect()
        };

        let border = if self.focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        List::new(items).block(block)
    }
}

fn message_to_item<'a>(message: &'a MessageState, theme: &Theme) -> ListItem<'a> {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    ListItem::new(Line::from(vec![
        Span::styled(format!("{time} "), theme.dim),
        Span::styled(
            format!("{} → {} ", message.from, message.to),
            Style::default().fg(theme.accent),
        ),
        Span::styled(message.content.as_str(), Style::default().fg(theme.fg)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn message(id: &str, content: &str, minute: u32) -> MessageState {
        MessageState {
            id: id.into(),
            from: "Hazel".into(),
            to: "Bramble".into(),
            content: content.into(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 18, 9, minute, 0).unwrap(),
        }
    }

    fn render(widget: &MessageFeedWidget, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(widget.to_list(&theme), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..60u16)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn newest_message_is_on_top() {
        let mut widget = MessageFeedWidget::new();
        widget.set_messages(vec![message("m1", "first", 1), message("m2", "second", 2)]);
        let rows = render(&widget, 5);
        assert!(rows[1].contains("second"));
        assert!(rows[2].contains("first"));
        assert!(rows[1].contains("Hazel → Bramble"));
    }

    #[test]
    fn scroll_skips_newest() {
        let mut widget = MessageFeedWidget::new();
        widget.set_messages(vec![message("m1", "first", 1), message("m2", "second", 2)]);
        widget.scroll_down();
        widget.scroll_down();
        assert_eq!(widget.scroll_offset, 1);
        let rows = render(&widget, 4);
        assert!(rows[1].contains("first"));
        widget.scroll_up();
        assert_eq!(widget.scroll_offset, 0);
    }

    #[test]
    fn renders_empty_state_message() {
        let rows = render(&MessageFeedWidget::new(), 3);
        assert!(rows[1].contains("No messages yet"));
    }
}
