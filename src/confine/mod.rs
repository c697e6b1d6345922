//! Resolving a user-supplied transcript path and confining it to the
//! Claude Code projects directory.

use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

/// `<home>/.claude/projects`, the only directory transcripts may be read from.
pub fn projects_dir(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}

/// Replace a leading `~/` with the home directory. A bare `~` or `~user`
/// is left alone.
pub fn expand_home(raw: &str, home: &Path) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// Make `path` absolute against `cwd` and fold away `.` and `..` without
/// touching the filesystem. `..` at the root stays at the root.
pub fn normalize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, which is what we want.
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// True when `path` is strictly below `base`. Both must already be
/// normalized. Comparison is per component, so `projects-evil` is not
/// inside `projects`.
pub fn is_strictly_inside(path: &Path, base: &Path) -> bool {
    path != base && path.starts_with(base)
}

/// Expand, normalize and confine a raw `transcript_path` value.
///
/// Fails if the result is not strictly inside `<home>/.claude/projects/`.
pub fn resolve_transcript_path(raw: &str, home: &Path, cwd: &Path) -> Result<PathBuf> {
    let base = normalize(&projects_dir(home), cwd);
    let resolved = normalize(&expand_home(raw, home), cwd);
    if !is_strictly_inside(&resolved, &base) {
        bail!(
            "transcript path {} is outside {}",
            resolved.display(),
            base.display()
        );
    }
    Ok(resolved)
}
