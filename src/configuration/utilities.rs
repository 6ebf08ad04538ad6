use std::{
    env::current_dir,
    path::{Path, PathBuf},
};

use miette::{miette, Context, IntoDiagnostic, Result};


/// File name looked up in the current directory when no path is given.
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "nanomq.conf";


/// Returns the default configuration filepath, which is at
/// `{current directory}/nanomq.conf`.
///
/// The file is not required to exist: a missing file is reported by the
/// parser like any other unreadable path.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let current_directory = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;

    Ok(default_configuration_file_path_in(&current_directory))
}

/// Returns `{directory}/nanomq.conf`.
pub fn default_configuration_file_path_in(directory: &Path) -> PathBuf {
    directory.join(DEFAULT_CONFIGURATION_FILE_NAME)
}

/// Canonical form of `path` for display, falling back to the path as given.
pub fn display_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
