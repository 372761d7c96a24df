//! Local read model folded from inbound frames.

use serde::{Deserialize, Serialize};

use crate::{
    AgentState, MessageState, ProjectGroup, ServerMessage, SessionInfo, TaskState,
    group_sessions,
};

/// Messages kept in the feed; older ones are dropped first.
pub const MAX_MESSAGES: usize = 200;

/// What the workshop currently knows about the followed session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkshopSnapshot {
    pub agents: Vec<AgentState>,
    pub tasks: Vec<TaskState>,
    pub messages: Vec<MessageState>,
    pub session: Option<SessionInfo>,
    pub sessions: Vec<SessionInfo>,
}

impl WorkshopSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of frames into a fresh snapshot.
    pub fn from_messages(messages: impl IntoIterator<Item = ServerMessage>) -> Self {
        let mut snapshot = Self::new();
        for msg in messages {
            snapshot.apply(msg);
        }
        snapshot
    }

    /// Apply one frame. Returns true when anything changed.
    pub fn apply(&mut self, msg: ServerMessage) -> bool {
        match msg {
            ServerMessage::Init {
                agents,
                tasks,
                messages,
                session,
            } => {
                tracing::debug!(
                    agents = agents.len(),
                    tasks = tasks.len(),
                    "Received initial state"
                );
                self.agents = agents;
                self.tasks = tasks;
                self.messages = messages;
                self.trim_messages();
                if session.is_some() {
                    self.session = session;
                }
                true
            }
            ServerMessage::AgentUpdate { agent } => {
                match self.agents.iter_mut().find(|a| a.id == agent.id) {
                    Some(existing) if *existing == agent => false,
                    Some(existing) => {
                        *existing = agent;
                        true
                    }
                    None => {
                        self.agents.push(agent);
                        true
                    }
                }
            }
            ServerMessage::AgentRemoved { agent_id } => {
                let before = self.agents.len();
                self.agents.retain(|a| a.id != agent_id);
                self.agents.len() != before
            }
            ServerMessage::TasksUpdate { tasks } => {
                if self.tasks == tasks {
                    return false;
                }
                self.tasks = tasks;
                true
            }
            ServerMessage::NewMessage { message } => {
                if self.messages.iter().any(|m| m.id == message.id) {
                    return false;
                }
                self.messages.push(message);
                self.trim_messages();
                true
            }
            ServerMessage::SessionsUpdate { sessions } => {
                if self.sessions == sessions {
                    return false;
                }
                self.sessions = sessions;
                true
            }
            ServerMessage::SessionSwitched { session } => {
                if self.session.as_ref().is_some_and(|s| s.id == session.id) {
                    return false;
                }
                // The new session's state arrives in a following init frame.
                self.agents.clear();
                self.tasks.clear();
                self.messages.clear();
                self.session = Some(session);
                true
            }
            ServerMessage::Unknown => {
                tracing::debug!("Ignoring message with unknown type");
                false
            }
        }
    }

    pub fn agent(&self, id: &str) -> Option<&AgentState> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// The session picker tree, with the followed session flagged.
    pub fn project_groups(&self) -> Vec<ProjectGroup> {
        group_sessions(&self.sessions, self.session.as_ref().map(|s| s.id.as_str()))
    }

    fn trim_messages(&mut self) {
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgentRole, AgentStatus, TaskStatus};
    use chrono::{TimeZone, Utc};

    fn agent(id: &str) -> AgentState {
        AgentState::new(id, format!("agent {id}"), AgentRole::Implementer)
    }

    fn message(id: &str) -> MessageState {
        MessageState {
            id: id.into(),
            from: "lead".into(),
            to: "tester".into(),
            content: "hello".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn session(id: &str) -> SessionInfo {
        SessionInfo {
            id: id.into(),
            slug: id.into(),
            project_path: "/code/acorn".into(),
            project_name: "acorn".into(),
            git_branch: Some("main".into()),
            worktree_path: None,
            last_activity: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            waiting_for_input: false,
            agent_count: 0,
        }
    }

    #[test]
    fn init_replaces_state() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.agents.push(agent("old"));

        let changed = snapshot.apply(ServerMessage::Init {
            agents: vec![agent("a1"), agent("a2")],
            tasks: vec![TaskState::new("t1", "Plan")],
            messages: vec![],
            session: Some(session("s1")),
        });

        assert!(changed);
        assert_eq!(snapshot.agents.len(), 2);
        assert!(snapshot.agent("old").is_none());
        assert_eq!(snapshot.session.as_ref().unwrap().id, "s1");
    }

    #[test]
    fn init_without_session_keeps_followed_session() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.apply(ServerMessage::SessionSwitched {
            session: session("s1"),
        });

        snapshot.apply(ServerMessage::Init {
            agents: vec![agent("a1")],
            tasks: vec![],
            messages: vec![],
            session: None,
        });
        assert_eq!(snapshot.session.as_ref().unwrap().id, "s1");
        assert_eq!(snapshot.agents.len(), 1);

        snapshot.apply(ServerMessage::Init {
            agents: vec![],
            tasks: vec![],
            messages: vec![],
            session: Some(session("s2")),
        });
        assert_eq!(snapshot.session.unwrap().id, "s2");
    }

    #[test]
    fn agent_update_upserts_and_is_idempotent() {
        let mut snapshot = WorkshopSnapshot::new();
        let mut a1 = agent("a1");

        assert!(snapshot.apply(ServerMessage::AgentUpdate { agent: a1.clone() }));
        assert!(!snapshot.apply(ServerMessage::AgentUpdate { agent: a1.clone() }));

        a1.status = AgentStatus::Working;
        assert!(snapshot.apply(ServerMessage::AgentUpdate { agent: a1 }));
        assert_eq!(snapshot.agents.len(), 1);
        assert_eq!(snapshot.agent("a1").unwrap().status, AgentStatus::Working);
    }

    #[test]
    fn agent_removed_reports_whether_anything_went() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.agents.push(agent("a1"));

        assert!(!snapshot.apply(ServerMessage::AgentRemoved {
            agent_id: "nope".into()
        }));
        assert!(snapshot.apply(ServerMessage::AgentRemoved {
            agent_id: "a1".into()
        }));
        assert!(snapshot.agents.is_empty());
    }

    #[test]
    fn tasks_update_replaces_whole_list() {
        let mut snapshot = WorkshopSnapshot::new();
        let mut task = TaskState::new("t1", "Build");

        assert!(snapshot.apply(ServerMessage::TasksUpdate {
            tasks: vec![task.clone()]
        }));
        task.status = TaskStatus::Completed;
        assert!(snapshot.apply(ServerMessage::TasksUpdate {
            tasks: vec![task.clone()]
        }));
        assert!(!snapshot.apply(ServerMessage::TasksUpdate { tasks: vec![task] }));
        assert_eq!(snapshot.tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn duplicate_message_ids_are_ignored() {
        let mut snapshot = WorkshopSnapshot::new();

        assert!(snapshot.apply(ServerMessage::NewMessage {
            message: message("m1")
        }));
        assert!(!snapshot.apply(ServerMessage::NewMessage {
            message: message("m1")
        }));
        assert_eq!(snapshot.messages.len(), 1);
    }

    #[test]
    fn message_feed_is_bounded() {
        let snapshot = WorkshopSnapshot::from_messages(
            (0..MAX_MESSAGES + 5).map(|i| ServerMessage::NewMessage {
                message: message(&format!("m{i}")),
            }),
        );

        assert_eq!(snapshot.messages.len(), MAX_MESSAGES);
        assert_eq!(snapshot.messages[0].id, "m5");
    }

    #[test]
    fn session_switch_clears_team_state() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.agents.push(agent("a1"));
        snapshot.session = Some(session("s1"));

        assert!(!snapshot.apply(ServerMessage::SessionSwitched {
            session: session("s1")
        }));
        assert_eq!(snapshot.agents.len(), 1);

        assert!(snapshot.apply(ServerMessage::SessionSwitched {
            session: session("s2")
        }));
        assert!(snapshot.agents.is_empty());
        assert_eq!(snapshot.session.unwrap().id, "s2");
    }

    #[test]
    fn unknown_message_is_a_no_op() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.agents.push(agent("a1"));
        let before = snapshot.clone();

        assert!(!snapshot.apply(ServerMessage::Unknown));
        assert_eq!(snapshot, before);
    }

    #[test]
    fn project_groups_flag_followed_session() {
        let mut snapshot = WorkshopSnapshot::new();
        snapshot.apply(ServerMessage::SessionsUpdate {
            sessions: vec![session("s1"), session("s2")],
        });
        snapshot.apply(ServerMessage::SessionSwitched {
            session: session("s2"),
        });

        let groups = snapshot.project_groups();
        let current: Vec<&str> = groups[0].branches[0]
            .sessions
            .iter()
            .filter(|s| s.is_current)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(current, vec!["s2"]);
    }
}
