/// Shared utilities used by every layer
pub mod cancellation;
pub mod error;
pub mod json;
pub mod result;
pub mod security;

pub use cancellation::CancelSignal;
pub use error::{AdcmError, ExitCode};
pub use result::Result;
