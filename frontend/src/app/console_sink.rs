use common::diagnostics::DiagnosticSink;

/// Reports to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn error(&self, message: &str) {
        leptos::logging::error!("{message}");
    }
}
