//! Coding sessions and their project -> branch -> session grouping.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a session.
pub type SessionId = String;

/// Bucket name for sessions that report no git branch.
pub const NO_BRANCH: &str = "(no branch)";

/// A coding session as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: SessionId,
    pub slug: String,
    pub project_path: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worktree_path: Option<String>,
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub waiting_for_input: bool,
    #[serde(default)]
    pub agent_count: u32,
}

/// A picker row for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionListEntry {
    pub id: SessionId,
    pub slug: String,
    pub last_activity: DateTime<Utc>,
    pub waiting_for_input: bool,
    pub agent_count: u32,
    pub is_current: bool,
}

impl SessionListEntry {
    fn from_info(info: &SessionInfo, current: Option<&str>) -> Self {
        Self {
            id: info.id.clone(),
            slug: info.slug.clone(),
            last_activity: info.last_activity,
            waiting_for_input: info.waiting_for_input,
            agent_count: info.agent_count,
            is_current: current == Some(info.id.as_str()),
        }
    }
}

/// Sessions sharing one branch of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchGroup {
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worktree_path: Option<String>,
    pub sessions: Vec<SessionListEntry>,
}

impl BranchGroup {
    /// Most recent activity of any session in the branch.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.sessions.iter().map(|s| s.last_activity).max()
    }

    pub fn has_waiting(&self) -> bool {
        self.sessions.iter().any(|s| s.waiting_for_input)
    }
}

/// Branches of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    pub project_path: String,
    pub project_name: String,
    pub branches: Vec<BranchGroup>,
}

impl ProjectGroup {
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.branches.iter().filter_map(BranchGroup::last_activity).max()
    }

    pub fn session_count(&self) -> usize {
        self.branches.iter().map(|b| b.sessions.len()).sum()
    }
}

/// Groups sessions strictly project -> branch -> session.
///
/// Every input session lands in exactly one branch bucket. Projects, branches
/// and sessions are each ordered most-recent-activity first; ties fall back to
/// path, branch name and session id so the output is stable.
pub fn group_sessions(sessions: &[SessionInfo], current: Option<&str>) -> Vec<ProjectGroup> {
    // project path -> (project name, branch -> (worktree, sessions))
    let mut tree: BTreeMap<&str, (&str, BTreeMap<&str, (Option<&str>, Vec<&SessionInfo>)>)> =
        BTreeMap::new();

    for session in sessions {
        let (_, branches) = tree
            .entry(session.project_path.as_str())
            .or_insert_with(|| (session.project_name.as_str(), BTreeMap::new()));
        let branch = session.git_branch.as_deref().unwrap_or(NO_BRANCH);
        let (worktree, bucket) = branches.entry(branch).or_insert((None, Vec::new()));
        if worktree.is_none() {
            *worktree = session.worktree_path.as_deref();
        }
        bucket.push(session);
    }

    let mut projects: Vec<ProjectGroup> = tree
        .into_iter()
        .map(|(path, (name, branches))| {
            let mut branches: Vec<BranchGroup> = branches
                .into_iter()
                .map(|(branch, (worktree, mut bucket))| {
                    bucket.sort_by(|a, b| {
                        b.last_activity
                            .cmp(&a.last_activity)
                            .then_with(|| a.id.cmp(&b.id))
                    });
                    BranchGroup {
                        branch: branch.to_string(),
                        worktree_path: worktree.map(str::to_string),
                        sessions: bucket
                            .into_iter()
                            .map(|s| SessionListEntry::from_info(s, current))
                            .collect(),
                    }
                })
                .collect();
            // BTreeMap iteration is ordered by name; the stable sort keeps
            // that order on ties.
            branches.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
            ProjectGroup {
                project_path: path.to_string(),
                project_name: name.to_string(),
                branches,
            }
        })
        .collect();

    projects.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    projects
}
