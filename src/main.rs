//! SubRip offset tool
//!
//! Shifts every `HH:MM:SS,mmm --> HH:MM:SS,mmm` cue timing in a subtitle
//! file by a fixed offset and writes the adjusted file to stdout.

mod config;
mod config_file;
mod error;
mod offset;
mod runner;
mod subtitle;

#[cfg(test)]
mod integration;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::config_file::{generate_default_config, ConfigFile, DEFAULT_CONFIG_FILE};
use crate::error::{Result, ShiftError};
use crate::runner::Options;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "srt-offset";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about, long_about = None)]
struct Args {
    /// Offset to apply, e.g. 1.5s, -200ms or 1m2s
    #[arg(short, long, allow_hyphen_values = true)]
    offset: Option<String>,

    /// TOML configuration file (default: ./srt-offset.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write a default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Subtitle file to shift
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    ExitCode::from(cli(std::env::args_os()))
}

/// Parse `argv`, run, and return the process exit code.
fn cli<I, T>(argv: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, on stdout
            let code = if e.use_stderr() { 1 } else { 0 };
            // Nowhere left to report a failure to print the usage message.
            e.print().ok();
            return code;
        }
    };

    match run_cli(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            e.exit_code()
        }
    }
}

fn run_cli(args: Args) -> Result<()> {
    let (mut settings, fallback) = load_settings(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }

    if let Some(offset) = &args.offset {
        settings.offset = offset.parse()?;
    }

    init_logging(&settings);
    tracing::debug!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = fallback {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            DEFAULT_CONFIG_FILE,
            e
        );
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Some(path) = &args.write_config {
        generate_default_config(path)?;
        tracing::info!("Default configuration written to {}", path.display());
        return Ok(());
    }

    let options = Options {
        input: args.file,
        offset: settings.offset,
    };
    runner::run(&options, &mut std::io::stdout().lock())
}

/// Resolve settings from an explicit config path or the default file.
///
/// An explicit file must load. A broken default file is reported back
/// alongside the defaults so it can be logged once logging is up.
fn load_settings(explicit: Option<&Path>) -> Result<(Settings, Option<ShiftError>)> {
    if let Some(path) = explicit {
        return Ok((ConfigFile::from_file(path)?.into_settings()?, None));
    }

    let path = Path::new(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok((Settings::default(), None));
    }
    match ConfigFile::from_file(path).and_then(ConfigFile::into_settings) {
        Ok(settings) => Ok((settings, None)),
        Err(e) => Ok((Settings::default(), Some(e))),
    }
}

/// Initialize logging with tracing, on stderr since stdout carries the output
fn init_logging(settings: &Settings) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        // Already installed when cli() runs more than once in a process.
        .try_init()
        .ok();
}
