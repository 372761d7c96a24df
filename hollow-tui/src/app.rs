//! Main application struct and event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use hollow_protocol::WorkshopSnapshot;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tokio::time::Instant;

use crate::keybindings::{Action, KeyBindings};
use crate::widgets::{AgentRosterWidget, MessageFeedWidget, SessionPickerWidget, TaskBoardWidget};
use crate::{HollowTerminal, Replay, Theme, restore_terminal, setup_terminal};

/// The panel that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Team,
    Tasks,
    Messages,
    Sessions,
}

impl Panel {
    const ORDER: [Panel; 4] = [Panel::Team, Panel::Tasks, Panel::Messages, Panel::Sessions];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Panel {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Replays an event stream and draws the resulting snapshot.
#[derive(Debug)]
pub struct App {
    pub snapshot: WorkshopSnapshot,
    pub replay: Replay,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub focus: Panel,
    pub running: bool,
    /// Delay between replayed frames.
    pub tick_rate: Duration,
    pub roster: AgentRosterWidget,
    pub tasks: TaskBoardWidget,
    pub messages: MessageFeedWidget,
    pub sessions: SessionPickerWidget,
    /// Tag of the last applied frame.
    pub last_event: Option<&'static str>,
    /// When the next frame is due. Set by the first tick.
    next_frame: Option<Instant>,
}

impl App {
    pub fn new(replay: Replay, theme_id: Option<&str>) -> Self {
        let mut app = Self {
            snapshot: WorkshopSnapshot::new(),
            replay,
            keybindings: KeyBindings::default(),
            theme: Theme::from_scene(hollow_scene::get_theme(theme_id)),
            focus: Panel::Team,
            running: true,
            tick_rate: Duration::from_millis(500),
            roster: AgentRosterWidget::new(),
            tasks: TaskBoardWidget::new(),
            messages: MessageFeedWidget::new(),
            sessions: SessionPickerWidget::new(),
            last_event: None,
            next_frame: None,
        };
        app.sync_focus();
        app
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Handles a key event. Ctrl-C always quits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Some(action) = self.keybindings.resolve(key) {
            self.execute_action(action);
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NavigateUp => match self.focus {
                Panel::Team => self.roster.select_prev(),
                Panel::Tasks => self.tasks.scroll_up(),
                Panel::Messages => self.messages.scroll_up(),
                Panel::Sessions => self.sessions.select_prev(),
            },
            Action::NavigateDown => match self.focus {
                Panel::Team => self.roster.select_next(),
                Panel::Tasks => self.tasks.scroll_down(),
                Panel::Messages => self.messages.scroll_down(),
                Panel::Sessions => self.sessions.select_next(),
            },
            Action::NextPanel => {
                self.focus = self.focus.next();
                self.sync_focus();
            }
            Action::PrevPanel => {
                self.focus = self.focus.prev();
                self.sync_focus();
            }
            Action::CycleTheme => self.cycle_theme(),
            Action::TogglePause => {
                self.replay.paused = !self.replay.paused;
                tracing::debug!(paused = self.replay.paused, "Toggled replay");
            }
            Action::Step => {
                if self.replay.paused {
                    self.advance();
                }
            }
        }
    }

    fn cycle_theme(&mut self) {
        let themes = hollow_scene::themes();
        let current = themes
            .iter()
            .position(|t| t.id == self.theme.id)
            .unwrap_or(0);
        let next = &themes[(current + 1) % themes.len()];
        tracing::debug!(theme = next.id, "Switched theme");
        self.theme = Theme::from_scene(next);
    }

    fn sync_focus(&mut self) {
        self.roster.focused = self.focus == Panel::Team;
        self.tasks.focused = self.focus == Panel::Tasks;
        self.messages.focused = self.focus == Panel::Messages;
        self.sessions.focused = self.focus == Panel::Sessions;
    }

    /// Apply the next replayed frame. Returns false once the replay is done.
    pub fn advance(&mut self) -> bool {
        let Some(kind) = self.replay.step(&mut self.snapshot) else {
            return false;
        };
        self.last_event = Some(kind);
        self.roster.set_agents(self.snapshot.agents.clone());
        self.tasks.set_tasks(self.snapshot.tasks.clone());
        self.messages.set_messages(self.snapshot.messages.clone());
        self.sessions.set_groups(self.snapshot.project_groups());
        true
    }

    /// Time left until the next frame is due.
    fn until_next_frame(&self) -> Duration {
        self.next_frame
            .map_or(self.tick_rate, |at| at.saturating_duration_since(Instant::now()))
    }

    /// Sleep until the next frame is due, then apply it unless paused.
    pub async fn tick(&mut self) {
        let due = *self
            .next_frame
            .get_or_insert_with(|| Instant::now() + self.tick_rate);
        tokio::time::sleep_until(due).await;
        // A late tick reschedules from now instead of catching up.
        self.next_frame = Some(due.max(Instant::now()) + self.tick_rate);

        if !self.replay.paused {
            self.advance();
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(self.header(), rows[0]);
        self.render_panels(frame, rows[1]);
        frame.render_widget(self.footer(), rows[2]);
    }

    fn render_panels(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        frame.render_widget(self.roster.to_list(&self.theme), left[0]);
        frame.render_widget(self.tasks.to_list(&self.theme), left[1]);
        frame.render_widget(self.messages.to_list(&self.theme), right[0]);
        frame.render_widget(self.sessions.to_list(&self.theme), right[1]);
    }

    fn header(&self) -> Paragraph<'_> {
        let session = match &self.snapshot.session {
            Some(s) => match &s.git_branch {
                Some(branch) => format!("{} ({}/{})", s.slug, s.project_name, branch),
                None => format!("{} ({})", s.slug, s.project_name),
            },
            None => "no session".to_string(),
        };
        let (applied, total) = self.replay.progress();
        let state = if self.replay.is_finished() {
            "✔ finished"
        } else if self.replay.paused {
            "⏸ paused"
        } else {
            "▶ playing"
        };

        Paragraph::new(Line::from(vec![
            Span::styled(" hollow ", self.theme.bold),
            Span::styled(
                format!("· {} ", self.theme.name),
                Style::default().fg(self.theme.accent),
            ),
            Span::styled(format!("· {session} "), Style::default().fg(self.theme.fg)),
            Span::styled(format!("· {applied}/{total} {state}"), self.theme.dim),
        ]))
    }

    fn footer(&self) -> Paragraph<'_> {
        let last = self.last_event.unwrap_or("-");
        Paragraph::new(Line::from(vec![
            Span::styled(
                " q quit · tab panel · j/k move · space pause · n step · t theme ",
                self.theme.dim,
            ),
            Span::styled(format!(" last: {last}"), Style::default().fg(self.theme.highlight)),
        ]))
    }

    /// Set up the terminal, run the loop, and always restore on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut HollowTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.until_next_frame())?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
                continue;
            }

            self.tick().await;
        }
        Ok(())
    }
}
