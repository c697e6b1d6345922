use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Run the binary with `home` as `$HOME` and working directory.
pub fn run_cli(home: &Path, args: &[&str], stdin_json: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_claude-notify"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("CLAUDE_NOTIFY_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // The binary may exit before reading stdin (bad flags, --help).
    let _ = child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin_json.as_bytes());

    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Like [`run_cli`] but with `--dry-run`, so notifications land on stdout.
pub fn run_dry(home: &Path, stdin_json: &str) -> (i32, String, String) {
    run_cli(home, &["--dry-run"], stdin_json)
}

/// A temp dir laid out as a home directory with one Claude project.
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_home() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".claude/projects/my-proj")).unwrap();
    dir
}

/// Write `contents` as the project's session transcript and return its path.
pub fn write_transcript(home: &Path, contents: &str) -> PathBuf {
    let path = home.join(".claude/projects/my-proj/session.jsonl");
    fs::write(&path, contents).unwrap();
    path
}

/// A transcript record whose first content block carries `description`.
pub fn tool_use_record(description: &str) -> String {
    serde_json::json!({
        "type": "assistant",
        "message": {
            "role": "assistant",
            "content": [
                {
                    "type": "tool_use",
                    "id": "toolu_01",
                    "name": "Task",
                    "input": { "description": description, "prompt": "..." }
                }
            ]
        }
    })
    .to_string()
}

pub fn hook_input(transcript_path: &Path) -> String {
    serde_json::json!({
        "session_id": "test-session",
        "transcript_path": transcript_path,
        "cwd": "/tmp",
        "hook_event_name": "Notification",
        "message": "Claude is waiting for your input"
    })
    .to_string()
}

/// Parse the single JSON line `--dry-run` prints.
pub fn notification(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("bad stdout {stdout:?}: {e}"))
}
