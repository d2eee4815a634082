/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that resource handlers and the CLI
/// use to drive the application core.
pub mod resource_lifecycle;

pub use resource_lifecycle::ResourceLifecycle;
