use super::error::AdcmError;

/// Type alias for Result with AdcmError as the error type.
/// Every layer below the CLI reports failures through this alias.
pub type Result<T> = std::result::Result<T, AdcmError>;
