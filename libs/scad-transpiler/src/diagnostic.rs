//! # Diagnostics
//!
//! Non-fatal findings reported alongside the generated code, such as a
//! `color` that has no effect on geometry or a segment count that was
//! clamped. Fatal problems are [`crate::TranspileError`]s instead.

use scad_ast::Position;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; the output is exactly what the source asked for.
    Info,
    /// The output differs from what the source literally asked for.
    Warning,
}

/// A diagnostic message with severity and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Position of the node the message is about.
    pub position: Position,
    /// Optional suggestion for the author.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic without a hint.
    pub fn new(severity: Severity, message: impl Into<String>, position: Position) -> Self {
        Self {
            severity,
            message: message.into(),
            position,
            hint: None,
        }
    }

    /// Attach a hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Create a warning.
    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self::new(Severity::Warning, message, position)
    }

    /// Create an informational note.
    pub fn info(message: impl Into<String>, position: Position) -> Self {
        Self::new(Severity::Info, message, position)
    }
}
