mod confine;
mod hook;
mod message;
mod notifier;
mod preferences;
mod transcript;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use hook::Env;
use notifier::{DryRun, Notifier};
use preferences::Preferences;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};
use types::Outcome;

/// Claude Code hook that shows the last tool description from the session
/// transcript as a desktop notification.
#[derive(Parser)]
#[command(name = "claude-notify", version)]
struct Cli {
    /// TOML preferences file (defaults are used if it does not exist)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the notification as JSON instead of showing it
    #[arg(long)]
    dry_run: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("CLAUDE_NOTIFY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "off",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn run(cli: &Cli) -> Result<Outcome> {
    let prefs = Preferences::load_optional(cli.config.as_deref())?;
    let input = read_stdin()?;
    let home = dirs::home_dir().context("cannot determine home directory")?;
    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let notifier: Box<dyn Notifier> = if cli.dry_run {
        Box::new(DryRun)
    } else {
        notifier::for_backend(prefs.backend)
    };

    let env = Env {
        home: &home,
        cwd: &cwd,
    };
    hook::run(&input, &env, &prefs, notifier.as_ref())
}

fn main() {
    // Bad arguments exit 1 silently like any other failure; --help and
    // --version still print.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(_) => process::exit(1),
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Notified(_)) => {}
        Ok(Outcome::Skipped(reason)) => tracing::debug!(?reason, "nothing to notify"),
        Err(err) => {
            tracing::debug!("claude-notify: {err:#}");
            process::exit(1);
        }
    }
}
