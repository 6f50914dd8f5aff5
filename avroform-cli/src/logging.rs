use std::{fs::OpenOptions, path::Path, sync::Mutex};

use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Send library events to `path`. The terminal belongs to the editor, so
/// nothing is logged unless a file is given.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .wrap_err("failed to create env filter")?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(())
}
