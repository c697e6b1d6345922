use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `null`, `false`, `0` and `""`: values a hook treats as "not set".
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ===================================================================
// Hook Input (received via stdin, snake_case JSON)
// ===================================================================

/// The subset of a Claude Code hook payload this tool reads.
///
/// Everything else Claude Code sends (`session_id`, `cwd`,
/// `hook_event_name`, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub transcript_path: Option<Value>,
}

impl HookInput {
    /// The transcript path. Falsy values count as absent; any other
    /// non-string value is an error.
    pub fn transcript_path(&self) -> Result<Option<&str>> {
        match &self.transcript_path {
            None => Ok(None),
            Some(value) if is_falsy(value) => Ok(None),
            Some(Value::String(path)) => Ok(Some(path.as_str())),
            Some(other) => bail!("transcript_path is not a string: {other}"),
        }
    }
}

// ===================================================================
// Notification
// ===================================================================

/// A desktop notification, ready to hand to a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

// ===================================================================
// Run outcome
// ===================================================================

/// Why a run finished without sending anything. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoTranscriptPath,
    EmptyTranscript,
    EmptyDescription,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Notified(Notification),
    Skipped(SkipReason),
}
