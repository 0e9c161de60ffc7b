//! Tracing setup: console output plus an optional log file.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = match &config.file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(file_appender(path)?)
                .with_ansi(false),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Appender writing to exactly `path`, never rotated.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let (dir, name) = split_log_path(path)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(&dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("assistant.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "assistant.log");

        let (dir, name) = split_log_path(Path::new("/var/log/panda/assistant.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/panda"));
        assert_eq!(name, "assistant.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_file_appender_writes_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assistant.log");

        let mut appender = file_appender(&path).unwrap();
        appender.write_all(b"Handling command: roll a dice\n").unwrap();
        appender.flush().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Handling command: roll a dice"));
    }
}
