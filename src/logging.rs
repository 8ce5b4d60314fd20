//! Diagnostic logging setup for the command-line tool
//!
//! Logs go to stderr so that stdout stays reserved for the success message
//! and `--list-designs` output.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Target prefix shared by the library and the binary.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    /// Checksum problems in the input armor
    #[default]
    Warn,
    /// Decoded label and sizes, output path
    Info,
    /// Payload, packet and blob sizes
    Debug,
    Trace,
}

impl LogLevel {
    /// Maximum verbosity this level lets through.
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// keyinject events at `level`; anything from dependencies is capped at warn.
pub fn log_filter(level: LogLevel) -> Targets {
    let filter = level.as_filter();
    Targets::new()
        .with_target(CRATE_TARGET, filter)
        .with_default(filter.min(LevelFilter::WARN))
}

/// Install a global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(log_filter(level));

    match format {
        LogFormat::Text => {
            let _ = registry.with(layer).try_init();
        }
        LogFormat::Json => {
            let _ = registry.with(layer.json()).try_init();
        }
    }
}
