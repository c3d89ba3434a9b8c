#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The renderer owns the terminal, so log output goes to a file named by
//! `DITHERGEN_LOG`. Without it no subscriber is installed and the core's
//! events cost a disabled-callsite check. `RUST_LOG` sets the filter
//! (default `info`).

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_PATH_ENV: &str = "DITHERGEN_LOG";
const DEFAULT_FILTER: &str = "info";

/// Resolve the log file path from an environment lookup.
pub fn log_path<F>(get_env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(LOG_PATH_ENV)
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber if `DITHERGEN_LOG` is set. Returns whether
/// one was installed.
pub fn init() -> io::Result<bool> {
    let Some(path) = log_path(|key| std::env::var(key).ok()) else {
        return Ok(false);
    };
    let file = File::create(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(path = %path.display(), "logging initialised");
    }
    Ok(installed)
}
