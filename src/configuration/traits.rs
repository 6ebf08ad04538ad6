use tracing::info;

/// Something that accepts human-readable diagnostic messages,
/// one message per call.
pub trait DiagnosticSink {
    fn emit(&mut self, message: &str);
}


/// Forwards every message to `tracing` at the `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Collects messages in memory.
impl DiagnosticSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
