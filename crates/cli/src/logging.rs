//! Diagnostics for one CLI run: a compact stderr layer and, when `[logging]`
//! names a file, an append-only file layer shared by every run.
//! `RUST_LOG` overrides both levels.

use favlink_core::config::{LoggingConfig, ResolvedConfig};
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber.
///
/// # Errors
/// The log file or its directory cannot be created.
pub fn init(cfg: &ResolvedConfig) -> io::Result<()> {
    let logging = &cfg.logging;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_filter(filter(&logging.level, LevelFilter::INFO));

    let file_layer = match &logging.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            if let Ok(mut g) = LOG_GUARD.lock() {
                *g = Some(guard);
            }
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter(file_level(logging), LevelFilter::DEBUG));
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();

    for level in [Some(logging.level.as_str()), logging.file_level.as_deref()].into_iter().flatten()
    {
        if parse_level(level).is_none() {
            warn!(value = level, "unknown log level in [logging], using the default");
        }
    }
    Ok(())
}

/// Flush the file logger. The worker guard flushes on drop, which a
/// `static` never does on its own.
pub fn shutdown() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn filter(level: &str, fallback: LevelFilter) -> EnvFilter {
    let level = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn file_level(logging: &LoggingConfig) -> &str {
    logging.file_level.as_deref().unwrap_or(&logging.level)
}

/// Open `path` for appending, creating it and its directory if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
