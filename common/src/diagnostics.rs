use std::sync::{Arc, Mutex};

/// Where failures are reported. Passed in rather than reached for globally.
pub trait DiagnosticSink {
    fn error(&self, message: &str);
}

/// Forwards to whatever `log` backend the process installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Keeps every message in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("Poisoned mutex").clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&self, message: &str) {
        self.entries
            .lock()
            .expect("Poisoned mutex")
            .push(message.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
