//! This module contains all configuration-relevant code: the configuration
//! record itself, its compiled-in defaults, and the parser that reads
//! overrides from a flat `key=value` file.
//!
//! Your starting point should probably be [`Configuration::load_from_path`].
//!
//! # Internals
//! Parsing is a pipeline with one pass over the file:
//! - [`DirectiveLines`] reads the file line by line and drops blank and
//!   comment lines,
//! - [`Directive::split`] separates each remaining line into key and value,
//! - the directive table (see [`recognized_keys`]) validates the value and
//!   only then writes it into the [`Configuration`].
//!
//! The first failing line aborts the whole file. Nothing is rolled back, so
//! after a failure the record holds the defaults plus whatever directives
//! came before the failing line.

mod directive;
mod directives;
mod error;
mod lines;
mod printer;
mod structure;
mod traits;
mod utilities;

#[cfg(test)]
mod test_utilities;

use std::path::Path;

pub use self::directive::{Directive, EmptyValue, SEPARATOR};
pub use self::directives::{
    recognized_keys,
    DISABLED_TOKEN,
    ENABLED_TOKEN,
    POSITIVE_RANGE,
    TASKQ_THREAD_RANGE,
};
pub use self::error::{ConfigurationError, RejectionReason};
pub use self::lines::{is_skippable, DirectiveLines, COMMENT_MARKER};
pub use self::printer::{print_configuration, UNSET_STRING};
pub use self::structure::*;
pub use self::traits::{DiagnosticSink, TracingSink};
pub use self::utilities::{
    default_configuration_file_path_in,
    display_path,
    get_default_configuration_file_path,
    DEFAULT_CONFIGURATION_FILE_NAME,
};


/// Parse the file at `path` into `configuration`.
///
/// `configuration` should already hold its defaults
/// (see [`initialize_defaults`]).
pub fn parse<P: AsRef<Path>>(
    configuration: &mut Configuration,
    path: P,
) -> Result<(), ConfigurationError> {
    configuration.apply_file(path)
}
