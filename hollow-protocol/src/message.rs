//! Inter-agent messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message sent between agents. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageState {
    pub id: String,
    pub from: String,
    pub to: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn message_decodes_rfc3339_timestamp() {
        let json = r#"{"id":"m1","from":"lead","to":"tester","content":"ship it",
            "timestamp":"2026-03-01T12:30:00Z"}"#;
        let msg: MessageState = serde_json::from_str(json).unwrap();

        assert_eq!(msg.from, "lead");
        assert_eq!(
            msg.timestamp,
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
        );
    }
}
