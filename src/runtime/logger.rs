use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);
impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" | "none" => LevelFilter::Off,
            _ => return Err(format!("Invalid log level: {}", s)),
        };
        Ok(LogLevel(level))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogMode {
    Both,
    Path,
    Terminal,
    Discard,
}
impl std::str::FromStr for LogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.to_lowercase().as_str() {
            "both" => LogMode::Both,
            "path" | "file" => LogMode::Path,
            "terminal" | "term" | "cli" => LogMode::Terminal,
            "discard" | "none" => LogMode::Discard,
            _ => return Err(format!("Invalid log mode: {}", s)),
        };
        Ok(mode)
    }
}

/// Writes every log record to stderr and to the log file
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()?;
        self.file.flush()
    }
}

fn open_log_file(log_path: &PathBuf) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))
}

/// Builder for the requested level and mode. RUST_LOG, when set, refines the
/// level given here, except in discard mode where nothing is ever written
pub fn build_logger(
    log_level: LogLevel,
    log_output: LogMode,
    log_path: &PathBuf,
) -> anyhow::Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    match log_output {
        LogMode::Discard => {
            builder.filter_level(LevelFilter::Off);
            builder.target(env_logger::Target::Pipe(Box::new(std::io::sink())));
            return Ok(builder);
        }

        LogMode::Terminal => {
            builder.target(env_logger::Target::Stderr);
        }

        LogMode::Path => {
            let file = open_log_file(log_path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        LogMode::Both => {
            let file = open_log_file(log_path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
        }
    };

    builder.filter_level(log_level.into());
    builder.parse_default_env();
    Ok(builder)
}

/// Install the global logger
pub fn setup_global_logger(
    log_level: LogLevel,
    log_output: LogMode,
    log_path: PathBuf,
) -> anyhow::Result<()> {
    build_logger(log_level, log_output, &log_path)?
        .try_init()
        .context("A global logger has already been installed")?;
    Ok(())
}
