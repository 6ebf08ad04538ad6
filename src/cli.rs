//! Command-line interface definitions for the reference host binary.

use std::path::PathBuf;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;



/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "nanoconf",
    author,
    about = "Loads, validates and prints a flat key=value daemon configuration.",
    version
)]
pub struct CLIArgs {
    /// Paths to the configuration files to use, applied in order.
    /// If unspecified, this defaults to `./nanomq.conf`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to a configuration file to use. May be repeated; later files \
                overwrite the keys they mention. Defaults to ./nanomq.conf"
    )]
    pub configuration_file_paths: Vec<PathBuf>,

    #[arg(
        long = "console-log-level",
        default_value = "info",
        help = "Level filter for console output, in RUST_LOG syntax."
    )]
    pub console_log_level: String,

    #[arg(
        long = "log-file-directory",
        help = "If set, logs are also written to a daily-rolling file in this directory."
    )]
    pub log_file_directory: Option<PathBuf>,

    #[arg(
        long = "log-file-level",
        default_value = "debug",
        help = "Level filter for log file output, in RUST_LOG syntax."
    )]
    pub log_file_level: String,

    #[arg(
        long = "emit-toml",
        help = "Print the resolved configuration as TOML on standard output."
    )]
    pub emit_toml: bool,

    #[arg(
        long = "allow-defaults-on-failure",
        help = "If the configuration cannot be loaded, report the error and continue \
                with the compiled-in defaults instead of exiting."
    )]
    pub allow_defaults_on_failure: bool,
}


/// Parse a level filter string (`info`, `nanoconf=debug,warn`, ...) into an [`EnvFilter`].
pub fn parse_level_filter(field_name: &str, value: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(value)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to parse {}: \"{}\".", field_name, value))
}
