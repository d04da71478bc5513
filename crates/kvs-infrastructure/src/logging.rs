//! Structured logging with tracing
//!
//! Configures the global subscriber: plain or JSON formatting on stdout,
//! optionally mirrored to a daily-rolling file. The `KVS_LOG` environment
//! variable overrides the configured level with a full filter directive.

use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use kvs_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// Fails with a configuration error if the level is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(path, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .config_context("Failed to install log subscriber")?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(path: &Path, json: bool) -> BoxedLayer {
    let appender = tracing_appender::rolling::daily(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_stem().unwrap_or_else(|| OsStr::new(LOG_FILE_STEM)),
    );
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a level name (`trace` through `error`, case-insensitive)
pub fn parse_log_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| Error::config(format!("Invalid log level '{level}'")))
}
