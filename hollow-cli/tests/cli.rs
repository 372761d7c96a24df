//! End-to-end tests for the `hollow` binary.
//!
//! Each run gets its own config directories so the user's files never leak
//! into the results.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const TEAM: &str = "../hollow-protocol/tests/fixtures/team.jsonl";

fn hollow(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hollow"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("HOLLOW_PROJECT_CONFIG_DIR", home.join("project"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run hollow")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    for cmd in ["render", "themes", "sessions", "watch", "config"] {
        assert!(out.contains(cmd), "missing {cmd}");
    }
}

#[test]
fn render_writes_svg_to_stdout() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["render", "--input", TEAM, "--theme", "night"]);

    assert!(output.status.success());
    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("data-theme=\"night\""));
    assert!(svg.contains("data-agent-id=\"lead-1\""));
}

#[test]
fn render_uses_project_config() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("project")).unwrap();
    std::fs::write(
        home.path().join("project/config.toml"),
        "[scene]\ntheme = \"winter\"\nwidth = 640\n",
    )
    .unwrap();
    let out_path = home.path().join("scene.svg");

    let output = hollow(
        home.path(),
        &["render", "--input", TEAM, "--output", out_path.to_str().unwrap()],
    );

    assert!(output.status.success());
    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("data-theme=\"winter\""));
    assert!(svg.contains("width=\"640\""));
}

#[test]
fn render_reports_bad_line() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("bad.jsonl");
    std::fs::write(&input, "{\"type\":\"heartbeat\"}\n{oops\n").unwrap();

    let output = hollow(home.path(), &["render", "--input", input.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn themes_lists_registry() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["themes"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Sunny Grove"));
    assert!(out.contains("Snowy Pines"));
}

#[test]
fn themes_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["themes", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert_eq!(ids, ["default", "night", "autumn", "winter"]);
}

#[test]
fn sessions_prints_tree() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["sessions", "--input", TEAM]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("acorn"));
    assert!(out.contains("⎇ main"));
    assert!(out.contains("quiet-otter"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["config", "show"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[scene]"));
    assert!(out.contains("theme = \"default\""));
    assert!(out.contains("tick_ms = 500"));
}

#[test]
fn config_path_shows_override_dir() {
    let home = TempDir::new().unwrap();
    let output = hollow(home.path(), &["config", "path"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("User config:"));
    assert!(out.contains(&home.path().join("project").display().to_string()));
}
