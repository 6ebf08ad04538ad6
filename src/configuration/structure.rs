use std::{io::BufRead, path::Path};

use miette::{Context, IntoDiagnostic, Result};
use serde::Serialize;
use tracing::error;

use super::{
    directive::{trim_trailing_space, Directive, EmptyValue},
    directives::{apply_directive, Rejection},
    error::ConfigurationError,
    lines::DirectiveLines,
};


pub const DEFAULT_NUM_TASKQ_THREAD: u8 = 10;
pub const DEFAULT_MAX_TASKQ_THREAD: u8 = 10;
pub const DEFAULT_PARALLEL: u32 = 30;
pub const DEFAULT_PROPERTY_SIZE: u32 = 32;
pub const DEFAULT_MSQ_LEN: u32 = 64;
pub const DEFAULT_QOS_TIMER: u32 = 30;


/// Whether the host should detach and run in the background.
///
/// `Unset` means the file never mentioned it, which the host may
/// treat differently from an explicit `Disabled`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DaemonMode {
    #[default]
    Unset,
    Enabled,
    Disabled,
}


/// The entire runtime configuration of the host daemon.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Address the broker listens on, e.g. `mqtt-tcp://0.0.0.0:1883`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub daemon: DaemonMode,

    /// Initial number of task queue threads (1-255).
    pub num_taskq_thread: u8,

    /// Upper limit of task queue threads (1-255).
    pub max_taskq_thread: u8,

    /// Number of requests handled in parallel.
    pub parallel: u32,

    pub property_size: u32,

    /// Length of the per-client message queue.
    pub msq_len: u32,

    /// QoS retry interval, in seconds.
    pub qos_timer: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        let mut configuration = Self {
            url: None,
            daemon: DaemonMode::Unset,
            num_taskq_thread: 0,
            max_taskq_thread: 0,
            parallel: 0,
            property_size: 0,
            msq_len: 0,
            qos_timer: 0,
        };

        initialize_defaults(&mut configuration);
        configuration
    }
}


/// Write the compiled-in numeric defaults into `configuration`.
///
/// `url` and `daemon` are left alone.
pub fn initialize_defaults(configuration: &mut Configuration) {
    configuration.num_taskq_thread = DEFAULT_NUM_TASKQ_THREAD;
    configuration.max_taskq_thread = DEFAULT_MAX_TASKQ_THREAD;
    configuration.parallel = DEFAULT_PARALLEL;
    configuration.property_size = DEFAULT_PROPERTY_SIZE;
    configuration.msq_len = DEFAULT_MSQ_LEN;
    configuration.qos_timer = DEFAULT_QOS_TIMER;
}


impl Configuration {
    /// Apply every directive of the file at `path`, in file order.
    ///
    /// Stops at the first invalid line. Directives applied before it stay
    /// applied.
    pub fn apply_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigurationError> {
        let result = DirectiveLines::open(path).and_then(|lines| self.apply_lines(lines));

        if let Err(error) = &result {
            error!("{}", error);
        }

        result
    }

    /// Apply every directive produced by `lines`, in order.
    pub fn apply_lines<R: BufRead>(
        &mut self,
        lines: DirectiveLines<R>,
    ) -> Result<(), ConfigurationError> {
        let origin = lines.origin().to_path_buf();

        for next_line in lines {
            let (line_number, line) = next_line?;

            let directive =
                Directive::split(&line).map_err(|EmptyValue| ConfigurationError::EmptyValue {
                    path: origin.clone(),
                    line_number,
                    line: trim_trailing_space(&line).to_string(),
                })?;

            apply_directive(self, &directive).map_err(|rejection| match rejection {
                Rejection::Invalid(reason) => ConfigurationError::UnrecognizedDirective {
                    path: origin.clone(),
                    line_number,
                    key: directive.key.to_string(),
                    reason,
                },
                Rejection::AllocationFailure => ConfigurationError::AllocationFailure {
                    path: origin.clone(),
                    line_number,
                },
            })?;
        }

        Ok(())
    }

    /// Load the configuration from a specific file path, on top of the defaults.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        Self::load_from_paths([configuration_file_path])
    }

    /// Load the configuration from several files, applied in order on top of
    /// the defaults. Later files overwrite only the keys they mention.
    pub fn load_from_paths<I, S>(configuration_file_paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut configuration = Self::default();

        for configuration_file_path in configuration_file_paths {
            let configuration_file_path = configuration_file_path.as_ref();

            configuration
                .apply_file(configuration_file_path)
                .wrap_err_with(|| {
                    format!(
                        "Could not load configuration file {}!",
                        configuration_file_path.display()
                    )
                })?;
        }

        Ok(configuration)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .into_diagnostic()
            .wrap_err("Could not serialize configuration to TOML.")
    }
}

