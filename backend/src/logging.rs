//! Tracing/logging initialization.

use anyhow::Context;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber: console output plus, when configured, a
/// daily-rolling log file. Keep the returned guard alive until shutdown or
/// buffered file output is lost.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|err| {
        eprintln!("Invalid log level '{}': {} (falling back to info)", config.level, err);
        EnvFilter::new("info")
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    let Some(file) = &config.file else {
        registry.try_init().context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "storefront.log".to_string());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(guard))
}
