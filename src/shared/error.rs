use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let automation distinguish argument mistakes from failures
/// reported by ADCM itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The requested operation completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, configuration error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors produced while talking to ADCM.
///
/// Every layer returns the first failure it meets unchanged; nothing here is
/// retried or aggregated.
#[derive(Debug, Error)]
pub enum AdcmError {
    #[error("ADCM request failed: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed response from ADCM while {context}\nDetails: {details}")]
    MalformedResponse { context: String, details: String },

    #[error("No {entity} matched {criteria}: your query returned no results\n\n💡 Hint: Please change your search criteria and try again")]
    NotFound { entity: String, criteria: String },

    #[error("{matches} {entity} entities matched {criteria}: your query returned more than one result\n\n💡 Hint: Please try a more specific search criteria")]
    AmbiguousQuery {
        entity: String,
        criteria: String,
        matches: usize,
    },

    #[error("Bundle {bundle_id} has no {kind} prototype\n\n💡 Hint: Check that the bundle id refers to a {kind} bundle")]
    NoPrototype { kind: String, bundle_id: i64 },

    #[error("{operation} is not supported for {entity}\n\n💡 Hint: Delete and re-create the {entity} instead")]
    UnsupportedOperation { entity: String, operation: String },

    #[error("Timed out after {waited:?} waiting for {what}")]
    Timeout { what: String, waited: Duration },

    #[error("Operation cancelled before the next ADCM request")]
    Cancelled,

    /// Validation error for user supplied models and identifiers
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to sign in to ADCM: {message}\n\n💡 Hint: Check the username and password (ADCM_USERNAME / ADCM_PASSWORD)")]
    Authentication { message: String },
}

impl AdcmError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(context: impl Into<String>, details: impl fmt::Display) -> Self {
        Self::MalformedResponse {
            context: context.into(),
            details: details.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported(entity: &str, operation: &str) -> Self {
        Self::UnsupportedOperation {
            entity: entity.to_string(),
            operation: operation.to_string(),
        }
    }

    /// HTTP status wrapped by a transport failure, if the server answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
