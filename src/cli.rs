//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::logging::LogConfig;

#[derive(Debug, Parser)]
#[command(
    name = "dressup",
    version,
    about = "Dress up an outfit and copy its style code",
    long_about = "Pick tops, bottoms, shoes, accessories and a perfume, then copy the \
                  outfit's style code to the clipboard to redeem it."
)]
pub struct Cli {
    /// TOML file replacing the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (logging is off otherwise).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.into(),
            log_file: self.log_file.clone(),
        }
    }
}
