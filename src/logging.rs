use std::fs::OpenOptions;
use std::sync::Mutex;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Routes operator logs to a file under the config dir. The TUI owns the
/// terminal's alternate screen, so nothing may print there.
pub fn init() -> Result<()> {
    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("coltons.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
