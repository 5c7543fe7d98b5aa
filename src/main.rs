// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod document_processor;
mod errors;
mod language_utils;
mod path_naming;
mod providers;
mod translation_service;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// mdtranslate - batch markdown/MDX document translator
///
/// Translates heading and paragraph text through the Youdao backend, rewrites
/// the front matter slug, and writes each result to a language-suffixed
/// sibling file.
#[derive(Parser, Debug)]
#[command(name = "mdtranslate")]
#[command(version = "0.1.0")]
#[command(about = "Batch markdown/MDX document translator")]
#[command(long_about = "mdtranslate walks each input document's syntax tree, translates the text of
headings and paragraphs, rewrites the front matter slug to /<lang><slug>, and
writes the result to <base>.<lang>.<ext> next to the input.

EXAMPLES:
    mdtranslate -l zh,fr docs/intro.md          # Translate one file
    mdtranslate -l zh -m 'docs/**/*.md'         # Translate everything matching a glob
    mdtranslate -f -l zh docs/intro.md          # Re-translate even if docs/intro.zh.md exists
    mdtranslate -c translate.json -l fr a.md    # Use a specific config file

CONFIGURATION:
    The config file (conf.json by default) holds the backend `appkey` and
    `secret`, plus an optional `transform` table mapping caller-facing
    language codes to backend codes, e.g. {\"zh\": \"zh-CHS\"}.")]
struct CommandLineOptions {
    /// Input document paths to translate
    #[arg(value_name = "INPUT_PATHS")]
    input_paths: Vec<String>,

    /// Glob pattern for additional input documents, resolved against the
    /// current working directory
    #[arg(short = 'm', long = "matcher")]
    matcher: Option<String>,

    /// Comma-separated target language codes (e.g. 'zh,fr')
    #[arg(short = 'l', long = "langs")]
    langs: String,

    /// Re-translate into a target language even if a translated sibling
    /// already exists
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct AppLogger {
    level: LevelFilter,
}

impl AppLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        AppLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(AppLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color prefix for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    AppLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    // Load configuration; the backend credentials cannot be defaulted, so a
    // missing config file is fatal.
    if !Path::new(&cli.config_path).exists() {
        return Err(anyhow!(
            "Config file not found at '{}', pass one with -c",
            cli.config_path
        ));
    }
    let config = Config::load(&cli.config_path)?;
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        let level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(level);
    }

    let langs: Vec<String> = cli
        .langs
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    if langs.is_empty() {
        return Err(anyhow!("No target languages given, check your `-l` argument"));
    }

    if cli.input_paths.is_empty() && cli.matcher.is_none() {
        warn!("No input paths and no matcher given, nothing to do");
        return Ok(());
    }

    let controller = Controller::with_config(config);
    controller
        .run(&cli.input_paths, cli.matcher.as_deref(), &langs, cli.force)
        .await?;

    Ok(())
}
