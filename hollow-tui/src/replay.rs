//! Playback of a recorded event stream.

use std::collections::VecDeque;

use hollow_protocol::{ProtocolError, ServerMessage, WorkshopSnapshot, decode_stream};

/// Frames waiting to be applied, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    pending: VecDeque<ServerMessage>,
    applied: usize,
    total: usize,
    pub paused: bool,
}

impl Replay {
    pub fn new(messages: impl IntoIterator<Item = ServerMessage>) -> Self {
        let pending: VecDeque<_> = messages.into_iter().collect();
        Self {
            total: pending.len(),
            pending,
            applied: 0,
            paused: false,
        }
    }

    /// Decode a JSON-lines stream.
    pub fn from_jsonl(input: &str) -> Result<Self, ProtocolError> {
        Ok(Self::new(decode_stream(input)?))
    }

    /// Apply the next frame to `snapshot`. Returns the frame's tag, or
    /// `None` once the replay is exhausted.
    pub fn step(&mut self, snapshot: &mut WorkshopSnapshot) -> Option<&'static str> {
        let msg = self.pending.pop_front()?;
        let kind = msg.kind();
        let changed = snapshot.apply(msg);
        self.applied += 1;
        tracing::debug!(kind, changed, applied = self.applied, "Replayed frame");
        Some(kind)
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// (applied, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.applied, self.total)
    }
}
