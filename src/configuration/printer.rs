use super::{
    structure::{Configuration, DaemonMode},
    traits::{DiagnosticSink, TracingSink},
};


/// Shown in place of a string field that was never set.
pub const UNSET_STRING: &str = "(null)";


impl DaemonMode {
    /// The token this mode is written as in a configuration file,
    /// or `unset`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DaemonMode::Unset => "unset",
            DaemonMode::Enabled => super::directives::ENABLED_TOKEN,
            DaemonMode::Disabled => super::directives::DISABLED_TOKEN,
        }
    }
}

impl std::fmt::Display for DaemonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


impl Configuration {
    /// One line per field, in a fixed order.
    pub fn rendered_lines(&self) -> Vec<String> {
        vec![
            format!("url is {}", self.url.as_deref().unwrap_or(UNSET_STRING)),
            format!("daemon is {}", self.daemon),
            format!("num_taskq_thread is {}", self.num_taskq_thread),
            format!("max_taskq_thread is {}", self.max_taskq_thread),
            format!("parallel is {}", self.parallel),
            format!("property_size is {}", self.property_size),
            format!("msq_len is {}", self.msq_len),
            format!("qos_timer is {}", self.qos_timer),
        ]
    }

    /// Write a header followed by every field to `sink`.
    pub fn print_to<S: DiagnosticSink>(&self, sink: &mut S) {
        sink.emit("This instance is configured as:");

        for line in self.rendered_lines() {
            sink.emit(&line);
        }
    }
}


/// Dump `configuration` to the log.
pub fn print_configuration(configuration: &Configuration) {
    configuration.print_to(&mut TracingSink);
}
