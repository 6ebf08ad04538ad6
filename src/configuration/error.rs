use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use super::directives::recognized_keys;


/// Why a recognized-looking directive was refused by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The key is not one of the recognized directive names.
    UnknownKey,

    /// An integer directive whose value does not start with a decimal digit.
    NotAnInteger { value: String },

    /// An integer directive whose value falls outside its allowed range.
    OutOfRange { value: String, min: u64, max: u64 },

    /// A flag directive whose value matches none of its tokens.
    UnknownToken {
        value: String,
        accepted: &'static [&'static str],
    },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::UnknownKey => write!(
                f,
                "no such directive, expected one of {}",
                recognized_keys().collect::<Vec<_>>().join(", ")
            ),
            RejectionReason::NotAnInteger { value } => {
                write!(f, "expected a decimal integer, got \"{}\"", value)
            }
            RejectionReason::OutOfRange { value, min, max } => write!(
                f,
                "value \"{}\" is outside the allowed range {}..={}",
                value, min, max
            ),
            RejectionReason::UnknownToken { value, accepted } => write!(
                f,
                "value \"{}\" is not one of {}",
                value,
                accepted.join(", ")
            ),
        }
    }
}


/// Every way a configuration file can fail to load.
///
/// None of these are recoverable inside the parser: the first one aborts
/// the whole file.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigurationError {
    #[error("configuration file \"{}\" not found or unreadable", .path.display())]
    #[diagnostic(
        code(nanoconf::file_open),
        help("check that the path exists and is readable by this process")
    )]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line_number} of \"{}\"", .path.display())]
    #[diagnostic(code(nanoconf::read))]
    Read {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: io::Error,
    },

    #[error(
        "no value is specified on line {line_number} of \"{}\", parsing aborts",
        .path.display()
    )]
    #[diagnostic(
        code(nanoconf::empty_value),
        help("directives take the form key=value")
    )]
    EmptyValue {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error(
        "cannot apply directive \"{key}\" on line {line_number} of \"{}\" ({reason}), parsing halted",
        .path.display()
    )]
    #[diagnostic(
        code(nanoconf::unrecognized_directive),
        help("check the directive name and that its value has the expected type and range")
    )]
    UnrecognizedDirective {
        path: PathBuf,
        line_number: usize,
        key: String,
        reason: RejectionReason,
    },

    #[error(
        "cannot allocate storage for url on line {line_number} of \"{}\", parsing aborts",
        .path.display()
    )]
    #[diagnostic(code(nanoconf::allocation_failure))]
    AllocationFailure { path: PathBuf, line_number: usize },
}

impl ConfigurationError {
    /// The offending directive key, if this error names one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigurationError::UnrecognizedDirective { key, .. } => Some(key),
            _ => None,
        }
    }
}
