//! Logging setup.
//!
//! By default log records go to stderr through a console appender at the
//! level chosen with `--log-level`, keeping stdout reserved for the report
//! itself. Power users can replace the whole logging configuration with a
//! log4rs config file in JSON form via `--log-config`.

use std::fs;
use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, RawConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LogLevel;
use crate::errors::LabelerError;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initializes the global logger.
///
/// With a config file the file wins entirely and `level` is ignored;
/// otherwise a stderr console appender is installed at `level`.
///
/// # Errors
///
/// - [`InvalidLoggerConfig`](LabelerError::InvalidLoggerConfig) when the
///   config file is not valid JSON.
/// - [`LoggerInit`](LabelerError::LoggerInit) when the file cannot be read,
///   describes appenders that cannot be built, or a logger is already
///   installed.
pub fn setup(level: LogLevel, config_file: Option<&Path>) -> Result<(), LabelerError> {
    match config_file {
        Some(path) => init_from_file(path),
        None => init_console(level.to_level_filter()),
    }
}

fn init_from_file(path: &Path) -> Result<(), LabelerError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        LabelerError::LoggerInit(format!("could not read {}: {e}", path.display()))
    })?;
    let raw: RawConfig = serde_json::from_str(&contents)
        .map_err(|_| LabelerError::InvalidLoggerConfig(path.display().to_string()))?;
    log4rs::config::init_raw_config(raw)
        .map(|_| ())
        .map_err(|e| LabelerError::LoggerInit(e.to_string()))
}

fn init_console(level: LevelFilter) -> Result<(), LabelerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| LabelerError::LoggerInit(e.to_string()))?;
    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|e| LabelerError::LoggerInit(e.to_string()))
}
