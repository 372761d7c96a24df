//! Panels drawn by the viewer.

mod agent_roster;
mod message_feed;
mod session_picker;
mod task_board;

pub use agent_roster::AgentRosterWidget;
pub use message_feed::MessageFeedWidget;
pub use session_picker::SessionPickerWidget;
pub use task_board::TaskBoardWidget;
