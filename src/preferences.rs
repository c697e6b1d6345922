use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const DEFAULT_TITLE: &str = "Claude Code";
const DEFAULT_FALLBACK_DESCRIPTION: &str = "unknown";
const DEFAULT_MAX_BODY_CHARS: usize = 250;

/// Which notification utility to spawn.
///
/// ```toml
/// backend = "notify-send"
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// `osascript` on macOS, `notify-send` everywhere else.
    #[default]
    Auto,
    Osascript,
    NotifySend,
}

impl Backend {
    /// Pin `Auto` to the utility for the current platform.
    pub fn resolve(self) -> Backend {
        match self {
            Backend::Auto if cfg!(target_os = "macos") => Backend::Osascript,
            Backend::Auto => Backend::NotifySend,
            other => other,
        }
    }
}

/// Optional user preferences, read from the file passed with `--config`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Preferences {
    /// Notification title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Body used when the last record has no description.
    #[serde(default = "default_fallback_description")]
    pub fallback_description: String,

    /// Bodies longer than this many characters are cut.
    #[serde(default = "default_max_body_chars")]
    pub max_body_chars: usize,

    #[serde(default)]
    pub backend: Backend,
}

fn default_title() -> String {
    DEFAULT_TITLE.into()
}

fn default_fallback_description() -> String {
    DEFAULT_FALLBACK_DESCRIPTION.into()
}

fn default_max_body_chars() -> usize {
    DEFAULT_MAX_BODY_CHARS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            title: default_title(),
            fallback_description: default_fallback_description(),
            max_body_chars: default_max_body_chars(),
            backend: Backend::default(),
        }
    }
}

impl Preferences {
    /// Load preferences from a TOML file.
    ///
    /// A missing file yields the defaults. Missing keys in an existing file
    /// are filled in with defaults via serde.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let prefs: Preferences = toml::from_str(&contents)
                    .with_context(|| format!("parsing {}", path.display()))?;
                Ok(prefs)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    /// Defaults when no path is given, otherwise [`Preferences::load`].
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
