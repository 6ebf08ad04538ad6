use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Initialize a console layer and, if `log_file_output_directory` is given,
/// a daily-rolling file layer.
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must keep it alive until the program exits.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_level_filter);

    let Some(log_file_output_directory) = log_file_output_directory else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .into_diagnostic()
            .wrap_err("Failed to install global tracing subscriber.")?;

        return Ok(None);
    };


    std::fs::create_dir_all(log_file_output_directory)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Failed to create log file directory at {}.",
                log_file_output_directory.display()
            )
        })?;

    let file_appender =
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install global tracing subscriber.")?;

    Ok(Some(guard))
}
