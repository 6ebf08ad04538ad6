use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing::Level;


/// In-memory log output shared between a subscriber and the test reading it.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `function` with a subscriber that records every event on this thread,
/// and return what it wrote.
pub(crate) fn capture_logs<F: FnOnce()>(function: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, function);

    let output = logs.0.lock().unwrap().clone();
    String::from_utf8(output).unwrap()
}
