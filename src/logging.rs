//! Session logging to a file under the data directory.
//!
//! The terminal is owned by the interface, so diagnostics go to `sift.log`
//! instead of stderr. Transport failures are recorded here with their root
//! cause; the interface itself only ever shows the generic failure message.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "sift.log";
const FILTER_ENV: &str = "SIFT_LOG";

/// Install the global subscriber writing to the log file. The `SIFT_LOG`
/// environment variable selects the filter; the default level is `info`.
pub fn initialize() -> Result<()> {
    let dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
