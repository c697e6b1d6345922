use crate::preferences::Backend;
use crate::types::Notification;
use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::process::Command;

/// AppleScript that reads the title and body from `argv`, so neither is
/// ever spliced into script source.
const OSASCRIPT_SOURCE: &str = "on run argv
  display notification (item 2 of argv) with title (item 1 of argv)
end run";

/// Something that can put a notification in front of the user.
pub trait Notifier {
    fn notify(&self, notification: &Notification) -> Result<()>;
}

/// macOS Notification Center via `osascript`.
pub struct Osascript;

/// freedesktop notifications via `notify-send`.
pub struct NotifySend;

/// Prints the notification as a JSON line on stdout instead of showing it.
pub struct DryRun;

impl Osascript {
    fn command(notification: &Notification) -> Command {
        let mut cmd = Command::new("osascript");
        cmd.arg("-e")
            .arg(OSASCRIPT_SOURCE)
            .arg(&notification.title)
            .arg(&notification.body);
        cmd
    }
}

impl NotifySend {
    fn command(notification: &Notification) -> Command {
        let mut cmd = Command::new("notify-send");
        cmd.arg(&notification.title).arg(&notification.body);
        cmd
    }
}

/// Spawn with inherited stdio and wait; a non-zero exit is an error.
fn run(mut cmd: Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(%program, "spawning notifier");
    let status = cmd
        .status()
        .with_context(|| format!("spawning {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

impl Notifier for Osascript {
    fn notify(&self, notification: &Notification) -> Result<()> {
        run(Self::command(notification))
    }
}

impl Notifier for NotifySend {
    fn notify(&self, notification: &Notification) -> Result<()> {
        run(Self::command(notification))
    }
}

impl DryRun {
    /// The JSON line printed for `notification`.
    pub fn line(notification: &Notification) -> Result<String> {
        serde_json::to_string(notification).context("serializing notification")
    }
}

impl Notifier for DryRun {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let line = Self::line(notification)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}").context("writing to stdout")?;
        Ok(())
    }
}

/// Pick the notifier for a configured backend.
pub fn for_backend(backend: Backend) -> Box<dyn Notifier> {
    match backend.resolve() {
        Backend::Osascript => Box::new(Osascript),
        Backend::NotifySend | Backend::Auto => Box::new(NotifySend),
    }
}
