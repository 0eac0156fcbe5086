/// Injected diagnostics sink. Components take this instead of logging
/// through a global, so callers and tests decide where warnings go.
pub trait ScanLog: Send + Sync {
    fn warn(&self, message: &str);

    fn debug(&self, _message: &str) {}
}

/// Writes warnings to stderr. What the CLI installs.
#[derive(Debug, Default)]
pub struct StderrLog;

impl ScanLog for StderrLog {
    fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullLog;

impl ScanLog for NullLog {
    fn warn(&self, _message: &str) {}
}
