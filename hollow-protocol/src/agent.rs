//! Agent records as published by the coordination service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent.
pub type AgentId = String;

/// Role an agent plays in its team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Lead,
    Researcher,
    Implementer,
    Tester,
    Reviewer,
}

impl AgentRole {
    pub const ALL: [AgentRole; 5] = [
        AgentRole::Lead,
        AgentRole::Researcher,
        AgentRole::Implementer,
        AgentRole::Tester,
        AgentRole::Reviewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Researcher => "researcher",
            Self::Implementer => "implementer",
            Self::Tester => "tester",
            Self::Reviewer => "reviewer",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an agent.
///
/// Transitions are driven by the service; nothing in the workshop computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Idle,
    Working,
    Done,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Working => "working",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an agent is blocked on the user.
///
/// Any string outside the known set decodes to [`WaitingType::Unknown`]
/// instead of failing the whole frame. The raw tag is kept so the value
/// serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaitingType {
    Permission,
    Question,
    Plan,
    PlanApproval,
    Unknown(String),
}

impl WaitingType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Permission => "permission",
            Self::Question => "question",
            Self::Plan => "plan",
            Self::PlanApproval => "plan_approval",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for WaitingType {
    fn from(value: &str) -> Self {
        match value {
            "permission" => Self::Permission,
            "question" => Self::Question,
            "plan" => Self::Plan,
            "plan_approval" => Self::PlanApproval,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for WaitingType {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Unknown(_) => Self::Unknown(value),
            known => known,
        }
    }
}

impl From<WaitingType> for String {
    fn from(value: WaitingType) -> Self {
        match value {
            WaitingType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Git metadata for the checkout an agent works in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitInfo {
    pub branch: Option<String>,
    pub worktree_path: Option<String>,
    pub is_worktree: bool,
    pub ahead: u32,
    pub behind: u32,
    pub dirty: bool,
}

/// One tracked agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentState {
    pub id: AgentId,
    pub name: String,
    pub role: AgentRole,
    pub status: AgentStatus,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_action: Option<String>,
    #[serde(default)]
    pub waiting_for_input: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_type: Option<WaitingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitInfo>,
}

impl AgentState {
    /// Creates an idle agent with no activity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: AgentRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            status: AgentStatus::Idle,
            tasks_completed: 0,
            current_action: None,
            waiting_for_input: false,
            waiting_type: None,
            git: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_decodes_from_camel_case_json() {
        let json = r#"{
            "id": "a1",
            "name": "Hazel",
            "role": "implementer",
            "status": "working",
            "tasksCompleted": 4,
            "currentAction": "Editing src/main.rs",
            "waitingForInput": true,
            "waitingType": "plan_approval",
            "git": { "branch": "feature/burrow", "isWorktree": true, "ahead": 2 }
        }"#;

        let agent: AgentState = serde_json::from_str(json).unwrap();

        assert_eq!(agent.role, AgentRole::Implementer);
        assert_eq!(agent.status, AgentStatus::Working);
        assert_eq!(agent.tasks_completed, 4);
        assert_eq!(agent.waiting_type, Some(WaitingType::PlanApproval));
        let git = agent.git.unwrap();
        assert_eq!(git.branch.as_deref(), Some("feature/burrow"));
        assert!(git.is_worktree);
        assert_eq!(git.ahead, 2);
        assert_eq!(git.behind, 0);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{"id":"a2","name":"Pip","role":"tester","status":"idle"}"#;
        let agent: AgentState = serde_json::from_str(json).unwrap();

        assert_eq!(agent, AgentState::new("a2", "Pip", AgentRole::Tester));
    }

    #[test]
    fn unrecognized_waiting_type_decodes_to_unknown() {
        let json = r#"{"id":"a3","name":"Oak","role":"lead","status":"working",
            "waitingForInput":true,"waitingType":"elicitation"}"#;
        let agent: AgentState = serde_json::from_str(json).unwrap();

        assert_eq!(
            agent.waiting_type,
            Some(WaitingType::Unknown("elicitation".into()))
        );
    }

    #[test]
    fn unrecognized_waiting_type_round_trips() {
        let mut agent = AgentState::new("a4", "Oak", AgentRole::Lead);
        agent.waiting_for_input = true;
        agent.waiting_type = Some(WaitingType::from("elicitation"));

        let json = serde_json::to_string(&agent).unwrap();
        assert!(json.contains(r#""waitingType":"elicitation""#));

        let back: AgentState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, agent);
    }

    #[test]
    fn waiting_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&WaitingType::PlanApproval).unwrap();
        assert_eq!(json, "\"plan_approval\"");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"id":"a4","name":"X","role":"janitor","status":"idle"}"#;
        assert!(serde_json::from_str::<AgentState>(json).is_err());
    }

    #[test]
    fn role_display_matches_wire_value() {
        for role in AgentRole::ALL {
            let wire = serde_json::to_string(&role).unwrap();
            assert_eq!(wire, format!("\"{}\"", role));
        }
    }
}
