//! Diagnostic logging setup.
//!
//! The interactive board owns the terminal, so it logs to a file. One-shot
//! commands log to stderr. `QABOARD_LOG` wins over the config filter.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "QABOARD_LOG";
const LOG_FILE: &str = "qaboard.log";

#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Append to `qaboard.log` inside this directory.
    File(PathBuf),
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn init(
    configured: Option<&str>,
    fallback: &str,
    target: LogTarget,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        configured
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(fallback))
    });

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|error| {
                    anyhow::anyhow!("failed to initialize tracing subscriber: {error}")
                })?;
            Ok(None)
        }
        LogTarget::File(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|error| {
                    anyhow::anyhow!("failed to initialize tracing subscriber: {error}")
                })?;
            Ok(Some(guard))
        }
    }
}
