//! Reading snapshots and event streams from files or stdin.

use std::path::Path;

use anyhow::{Context, Result};
use hollow_protocol::{ServerMessage, WorkshopSnapshot, decode_message, decode_stream};
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Read the whole input. `-` means stdin.
pub async fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// What an input document turned out to contain.
#[derive(Debug)]
pub enum Input {
    /// A single JSON object holding the whole snapshot.
    Snapshot(WorkshopSnapshot),
    /// One or more `ServerMessage` frames.
    Frames(Vec<ServerMessage>),
}

impl Input {
    /// A lone JSON object without a `type` tag is a snapshot, and one with a
    /// tag is a single frame, however it is laid out. Anything else is
    /// treated as a JSON-lines stream of frames.
    pub fn parse(text: &str) -> Result<Self> {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
            if map.contains_key("type") {
                let frame = decode_message(text).context("Invalid frame")?;
                return Ok(Input::Frames(vec![frame]));
            }
            let snapshot =
                serde_json::from_value(Value::Object(map)).context("Invalid snapshot")?;
            return Ok(Input::Snapshot(snapshot));
        }
        Ok(Input::Frames(decode_stream(text)?))
    }

    pub fn into_snapshot(self) -> WorkshopSnapshot {
        match self {
            Input::Snapshot(snapshot) => snapshot,
            Input::Frames(frames) => WorkshopSnapshot::from_messages(frames),
        }
    }
}

/// Read and fold an input into a snapshot.
pub async fn load_snapshot(path: &Path) -> Result<WorkshopSnapshot> {
    let text = read_source(path).await?;
    let input = Input::parse(&text)?;
    tracing::debug!(
        kind = match &input {
            Input::Snapshot(_) => "snapshot",
            Input::Frames(_) => "frames",
        },
        "Parsed input"
    );
    Ok(input.into_snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_without_type_is_a_snapshot() {
        let input = Input::parse(
            r#"{"agents":[{"id":"a","name":"Hazel","role":"lead","status":"idle"}]}"#,
        )
        .unwrap();
        let Input::Snapshot(snapshot) = input else {
            panic!("expected snapshot");
        };
        assert_eq!(snapshot.agents[0].name, "Hazel");
    }

    #[test]
    fn single_tagged_frame_is_a_stream() {
        let input = Input::parse(r#"{"type":"agent_removed","agentId":"a"}"#).unwrap();
        assert!(matches!(input, Input::Frames(ref f) if f.len() == 1));
    }

    #[test]
    fn pretty_printed_frame_is_a_stream() {
        let text = "{\n  \"type\": \"agent_removed\",\n  \"agentId\": \"a\"\n}\n";
        let input = Input::parse(text).unwrap();
        let Input::Frames(frames) = input else {
            panic!("expected frames");
        };
        assert!(matches!(
            frames.as_slice(),
            [ServerMessage::AgentRemoved { agent_id }] if agent_id == "a"
        ));
    }

    #[test]
    fn malformed_lone_frame_is_an_error() {
        let err = Input::parse("{\n  \"type\": \"agent_removed\"\n}").unwrap_err();
        assert!(err.to_string().contains("Invalid frame"));
    }

    #[test]
    fn multiple_lines_fold_in_order() {
        let text = concat!(
            r#"{"type":"agent_update","agent":{"id":"a","name":"Hazel","role":"lead","status":"working"}}"#,
            "\n",
            r#"{"type":"agent_update","agent":{"id":"b","name":"Bramble","role":"tester","status":"idle"}}"#,
            "\n",
        );
        let snapshot = Input::parse(text).unwrap().into_snapshot();
        let names: Vec<_> = snapshot.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Hazel", "Bramble"]);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let text = "{\"type\":\"heartbeat\"}\nnot json\n";
        let err = Input::parse(text).unwrap_err().to_string();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn demo_files_parse() {
        let stream = Input::parse(include_str!("../../demos/workshop.jsonl"))
            .unwrap()
            .into_snapshot();
        let names: Vec<_> = stream.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Juniper", "Pip", "Clover", "Fern"]);
        assert_eq!(stream.tasks.len(), 4);
        assert_eq!(stream.messages.len(), 2);

        let snapshot = Input::parse(include_str!("../../demos/snapshot.json")).unwrap();
        assert!(matches!(snapshot, Input::Snapshot(ref s) if s.agents.len() == 4));
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let err = load_snapshot(Path::new("/nonexistent/hollow.jsonl"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hollow.jsonl"));
    }
}
