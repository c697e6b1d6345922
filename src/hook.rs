use crate::confine;
use crate::message;
use crate::notifier::Notifier;
use crate::preferences::Preferences;
use crate::transcript;
use crate::types::{HookInput, Notification, Outcome, SkipReason};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Where the hook runs: the invoking user's home and working directory.
pub struct Env<'a> {
    pub home: &'a Path,
    pub cwd: &'a Path,
}

/// Handle one hook payload end to end.
///
/// "Nothing to do" cases come back as [`Outcome::Skipped`]; everything
/// else that goes wrong is an error, including a transcript path outside
/// `<home>/.claude/projects/`.
pub fn run(
    input: &str,
    env: &Env<'_>,
    prefs: &Preferences,
    notifier: &dyn Notifier,
) -> Result<Outcome> {
    let hook_input: HookInput =
        serde_json::from_str(input).context("parsing hook input")?;

    let Some(raw_path) = hook_input.transcript_path()? else {
        debug!("no transcript_path in hook input");
        return Ok(Outcome::Skipped(SkipReason::NoTranscriptPath));
    };

    let path = confine::resolve_transcript_path(raw_path, env.home, env.cwd)?;
    debug!(path = %path.display(), "reading transcript");

    let Some(description) = transcript::read_last_description(&path)? else {
        return Ok(Outcome::Skipped(SkipReason::EmptyTranscript));
    };

    let text = description.or_fallback(&prefs.fallback_description);
    if text.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::EmptyDescription));
    }

    let notification = Notification {
        title: prefs.title.clone(),
        body: message::sanitize(&text, prefs.max_body_chars),
    };
    notifier
        .notify(&notification)
        .context("sending notification")?;
    info!(body = %notification.body, "notification sent");
    Ok(Outcome::Notified(notification))
}
