//! Terminal viewer for the hollow workshop.
//!
//! Replays a recorded event stream into a [`hollow_protocol::WorkshopSnapshot`]
//! and draws the team, tasks, messages and sessions with ratatui.

mod app;
mod keybindings;
mod replay;
mod terminal;
mod theme;
mod widgets;

pub use app::{App, Panel};
pub use keybindings::{Action, KeyBindings};
pub use replay::Replay;
pub use terminal::{HollowTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::Theme;
pub use widgets::{AgentRosterWidget, MessageFeedWidget, SessionPickerWidget, TaskBoardWidget};
