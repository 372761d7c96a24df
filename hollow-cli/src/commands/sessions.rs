//! Print the project -> branch -> session tree

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use hollow_protocol::ProjectGroup;

use crate::input::load_snapshot;

#[derive(Args, Debug)]
pub struct SessionsArgs {
    /// Snapshot JSON or JSON-lines event stream (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Print the grouped tree as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SessionsArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.input).await?;
    let groups = snapshot.project_groups();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if groups.is_empty() {
        println!("No sessions");
    } else {
        print!("{}", format_tree(&groups));
    }
    Ok(())
}

fn format_tree(groups: &[ProjectGroup]) -> String {
    let mut out = String::new();
    for project in groups {
        let _ = writeln!(out, "{}  {}", project.project_name, project.project_path);
        for branch in &project.branches {
            match &branch.worktree_path {
                Some(worktree) => {
                    let _ = writeln!(out, "  ⎇ {}  ({worktree})", branch.branch);
                }
                None => {
                    let _ = writeln!(out, "  ⎇ {}", branch.branch);
                }
            }
            for session in &branch.sessions {
                let marker = if session.is_current { "●" } else { "○" };
                let agents = match session.agent_count {
                    1 => "1 agent".to_string(),
                    n => format!("{n} agents"),
                };
                let when = session
                    .last_activity
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M");
                let waiting = if session.waiting_for_input {
                    "  needs input"
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "    {marker} {:<16} {agents:<9} {when}{waiting}",
                    session.slug
                );
            }
        }
    }
    out
}
