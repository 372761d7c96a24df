//! Data contract for the hollow agent workshop.
//!
//! Every type here is a value object published by the external coordination
//! service. The workshop only reads them to decide what to draw; the one
//! piece of behaviour is [`WorkshopSnapshot`], a local read model folded from
//! inbound [`ServerMessage`] frames.

mod agent;
mod error;
mod message;
mod session;
mod snapshot;
mod task;
mod ws;

pub use agent::{AgentId, AgentRole, AgentState, AgentStatus, GitInfo, WaitingType};
pub use error::{ProtocolError, TaskGraphError};
pub use message::MessageState;
pub use session::{
    BranchGroup, NO_BRANCH, ProjectGroup, SessionId, SessionInfo, SessionListEntry,
    group_sessions,
};
pub use snapshot::{MAX_MESSAGES, WorkshopSnapshot};
pub use task::{TaskId, TaskState, TaskStatus, validate_task_graph};
pub use ws::{ServerMessage, decode_message, decode_stream};
