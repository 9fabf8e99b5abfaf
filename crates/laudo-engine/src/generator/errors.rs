//! Error and warning types for report generation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recoverable problem met while generating; the document is still produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationWarning {
    /// Human-readable message, shown to the operator
    pub message: String,
    /// What the operator can do about it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl GenerationWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Errors that stop generation
#[derive(Error, Debug)]
pub enum LaudoError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Document packing failed: {0}")]
    PackError(String),

    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    #[error("Generation task failed: {0}")]
    TaskFailed(String),
}
