use std::fmt::Display;

/// Fire-and-forget sink for non-fatal startup failures.
pub trait DiagnosticSink {
    fn report(&self, message: &str, detail: &dyn Display);
}

/// Reports through the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, message: &str, detail: &dyn Display) {
        log::error!("{message} {detail}");
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, message: &str, detail: &dyn Display) {
        (**self).report(message, detail);
    }
}
