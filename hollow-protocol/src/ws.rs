//! Inbound update events.
//!
//! The service pushes these frames to every viewer. How they travel is not
//! our concern: the workshop reads them from files, pipes or replays.

use serde::{Deserialize, Serialize};

use crate::{AgentState, MessageState, ProtocolError, SessionInfo, TaskState};

/// Messages sent from the coordination service to viewers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Full state on connect or session switch
    Init {
        #[serde(default)]
        agents: Vec<AgentState>,
        #[serde(default)]
        tasks: Vec<TaskState>,
        #[serde(default)]
        messages: Vec<MessageState>,
        #[serde(default)]
        session: Option<SessionInfo>,
    },

    /// One agent was added or changed
    AgentUpdate { agent: AgentState },

    /// An agent left the team
    AgentRemoved { agent_id: String },

    /// The task list changed (always sent whole)
    TasksUpdate { tasks: Vec<TaskState> },

    /// A new inter-agent message
    NewMessage { message: MessageState },

    /// The set of known sessions changed
    SessionsUpdate { sessions: Vec<SessionInfo> },

    /// The viewer now follows a different session
    SessionSwitched { session: SessionInfo },

    /// Any tag this build does not know about
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// The wire tag of this message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::AgentUpdate { .. } => "agent_update",
            Self::AgentRemoved { .. } => "agent_removed",
            Self::TasksUpdate { .. } => "tasks_update",
            Self::NewMessage { .. } => "new_message",
            Self::SessionsUpdate { .. } => "sessions_update",
            Self::SessionSwitched { .. } => "session_switched",
            Self::Unknown => "unknown",
        }
    }
}

/// Decode a single JSON frame.
///
/// Malformed JSON fails; a well-formed frame with an unrecognized `type`
/// decodes to [`ServerMessage::Unknown`].
pub fn decode_message(frame: &str) -> Result<ServerMessage, ProtocolError> {
    Ok(serde_json::from_str(frame)?)
}

/// Decode a JSON-lines stream, skipping blank lines.
pub fn decode_stream(input: &str) -> Result<Vec<ServerMessage>, ProtocolError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ProtocolError::InvalidLine {
                line: index + 1,
                source,
            })
        })
        .collect()
}
