//! Loader for a daemon's flat `key=value` runtime configuration.
//!
//! ```no_run
//! use nanoconf::configuration::{initialize_defaults, parse, print_configuration, Configuration};
//!
//! let mut configuration = Configuration::default();
//! initialize_defaults(&mut configuration);
//!
//! if parse(&mut configuration, "nanomq.conf").is_ok() {
//!     print_configuration(&configuration);
//! }
//! ```

pub mod configuration;
pub mod logging;
