/// Mock implementations for testing
mod mock_bundle_source;
mod mock_diagnostic_sink;
mod mock_progress_reporter;

pub use mock_bundle_source::MockBundleSource;
pub use mock_diagnostic_sink::MockDiagnosticSink;
pub use mock_progress_reporter::MockProgressReporter;
