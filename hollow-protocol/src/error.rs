//! Error types for hollow-protocol

use thiserror::Error;

/// Errors raised while decoding inbound frames
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid message: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid message on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Violations of the task dependency contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskGraphError {
    #[error("Task {task} references itself")]
    SelfReference { task: String },

    #[error("Task {task} references unknown task {reference}")]
    UnknownTask { task: String, reference: String },
}
