/// Console adapters writing to stderr
mod diagnostic_sink;
mod progress_reporter;

pub use diagnostic_sink::StderrDiagnosticSink;
pub use progress_reporter::StderrProgressReporter;
