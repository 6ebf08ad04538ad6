use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use miette::{Context, Result};
use nanoconf::{
    configuration::{
        display_path,
        get_default_configuration_file_path,
        print_configuration,
        Configuration,
    },
    logging::initialize_tracing,
};
use tracing::{error, info, warn};

use crate::cli::{parse_level_filter, CLIArgs};

mod cli;


/// Load `configuration_file_paths` in order on top of the defaults.
///
/// The parser has already logged the cause of any failure, so this only
/// decides what happens next: `None` means the host must not start.
fn load_configuration(
    configuration_file_paths: &[PathBuf],
    allow_defaults_on_failure: bool,
) -> Option<Configuration> {
    for path in configuration_file_paths {
        info!("Loading configuration: {}", display_path(path).display());
    }

    match Configuration::load_from_paths(configuration_file_paths) {
        Ok(configuration) => Some(configuration),
        Err(_) if allow_defaults_on_failure => {
            warn!("Continuing with compiled-in defaults.");
            Some(Configuration::default())
        }
        Err(_) => None,
    }
}


fn main() -> Result<ExitCode> {
    let cli_args = CLIArgs::parse();

    let logging_raii_guard = initialize_tracing(
        parse_level_filter("console-log-level", &cli_args.console_log_level)?,
        parse_level_filter("log-file-level", &cli_args.log_file_level)?,
        cli_args.log_file_directory.as_deref(),
        "nanoconf.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!("Tracing initialized.");


    let configuration_file_paths = if cli_args.configuration_file_paths.is_empty() {
        info!("Loading configuration at default path.");
        vec![get_default_configuration_file_path()?]
    } else {
        cli_args.configuration_file_paths.clone()
    };

    let Some(configuration) =
        load_configuration(&configuration_file_paths, cli_args.allow_defaults_on_failure)
    else {
        error!("Failed to load configuration, refusing to start.");

        drop(logging_raii_guard);
        return Ok(ExitCode::FAILURE);
    };

    print_configuration(&configuration);

    if cli_args.emit_toml {
        print!("{}", configuration.to_toml_string()?);
    }


    drop(logging_raii_guard);
    Ok(ExitCode::SUCCESS)
}


#[cfg(test)]
mod tests {
    use std::fs;

    use nanoconf::configuration::default_configuration_file_path_in;

    use super::*;

    #[test]
    fn missing_default_file_falls_back_when_allowed() {
        let directory = tempfile::tempdir().unwrap();
        let default_path = default_configuration_file_path_in(directory.path());

        let configuration = load_configuration(&[default_path], true);

        assert_eq!(configuration, Some(Configuration::default()));
    }

    #[test]
    fn missing_default_file_refuses_to_start_otherwise() {
        let directory = tempfile::tempdir().unwrap();
        let default_path = default_configuration_file_path_in(directory.path());

        assert_eq!(load_configuration(&[default_path], false), None);
    }

    #[test]
    fn invalid_directive_falls_back_to_defaults_not_partial_values() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("nanomq.conf");
        fs::write(&path, "parallel=3\nfoo=bar\n").unwrap();

        assert_eq!(load_configuration(&[path.clone()], false), None);
        assert_eq!(
            load_configuration(&[path], true),
            Some(Configuration::default())
        );
    }

    #[test]
    fn valid_files_load_in_order() {
        let directory = tempfile::tempdir().unwrap();
        let first = directory.path().join("first.conf");
        let second = directory.path().join("second.conf");
        fs::write(&first, "parallel=3\n").unwrap();
        fs::write(&second, "parallel=4\nmsq_len=5\n").unwrap();

        let configuration = load_configuration(&[first, second], false).unwrap();

        assert_eq!(configuration.parallel, 4);
        assert_eq!(configuration.msq_len, 5);
    }
}
