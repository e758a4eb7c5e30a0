//! Log capture for tests that assert on emitted diagnostics.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Lines logged on the current thread while `f` runs.
#[derive(Debug)]
pub struct CapturedLogs(Vec<String>);

impl CapturedLogs {
    /// Number of lines logged at exactly `level`.
    pub fn count(&self, level: Level) -> usize {
        let tag = level.as_str();
        self.0
            .iter()
            .filter(|line| line.trim_start().starts_with(tag))
            .count()
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

/// Run `f` under a plain-text `fmt` subscriber at debug level and return what it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect();
    (result, CapturedLogs(lines))
}
