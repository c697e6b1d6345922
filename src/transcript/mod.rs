//! Reading the last record of a JSONL transcript and pulling the tool
//! description out of it.

use crate::types::is_falsy;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// What the last record says about its first content block's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// `description` is a non-empty string.
    Text(String),
    /// `description` is `""`, `false` or `0`.
    Empty,
    /// `description` is absent or `null`.
    Missing,
}

impl Description {
    /// Resolve to the text to show, using `fallback` when missing.
    pub fn or_fallback(self, fallback: &str) -> String {
        match self {
            Description::Text(text) => text,
            Description::Empty => String::new(),
            Description::Missing => fallback.to_string(),
        }
    }
}

/// The last line of a transcript, ignoring surrounding whitespace.
/// Returns `None` when the transcript is blank.
pub fn last_line(contents: &str) -> Option<&str> {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .rsplit('\n')
        .next()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
}

/// Parse one transcript record and extract
/// `message.content[0].input.description`.
pub fn extract_description(line: &str) -> Result<Description> {
    let record: Value = serde_json::from_str(line).context("parsing last transcript record")?;

    let input = record
        .get("message")
        .context("record has no message")?
        .get("content")
        .context("message has no content")?
        .get(0)
        .context("message content has no first block")?
        .get("input")
        .context("first content block has no input")?;
    if !input.is_object() {
        bail!("content block input is not an object");
    }

    match input.get("description") {
        None | Some(Value::Null) => Ok(Description::Missing),
        Some(value) if is_falsy(value) => Ok(Description::Empty),
        Some(Value::String(s)) => Ok(Description::Text(s.clone())),
        Some(other) => bail!("description is not a string: {other}"),
    }
}

/// Read the transcript at `path` and return the description from its last
/// record, or `None` if the file is blank.
///
/// Invalid UTF-8 is replaced rather than rejected; a bad byte in an old
/// record must not hide the last one.
pub fn read_last_description(path: &Path) -> Result<Option<Description>> {
    let bytes =
        fs::read(path).with_context(|| format!("reading transcript {}", path.display()))?;
    let contents = String::from_utf8_lossy(&bytes);
    match last_line(&contents) {
        Some(line) => extract_description(line).map(Some),
        None => Ok(None),
    }
}
