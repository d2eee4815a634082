/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach ADCM, bundle downloads and the user's console.
pub mod adcm_transport;
pub mod bundle_source;
pub mod diagnostic_sink;
pub mod progress_reporter;

pub use adcm_transport::{AdcmTransport, ApiMethod, ApiRequest, RequestBody};
pub use bundle_source::{BundleArchive, BundleSource};
pub use diagnostic_sink::{Diagnostic, DiagnosticSeverity, DiagnosticSink};
pub use progress_reporter::ProgressReporter;
