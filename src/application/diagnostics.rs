use crate::ports::outbound::Diagnostic;
use crate::shared::AdcmError;

/// Converts a failed operation into the diagnostic shown to the user
///
/// The summary names the operation ("Error creating cluster"); the detail
/// carries the error message unchanged.
pub fn to_diagnostic(operation: &str, entity: &str, error: &AdcmError) -> Diagnostic {
    let summary = format!("Error {} {}", operation, entity);
    let detail = match error {
        AdcmError::NotFound { .. }
        | AdcmError::AmbiguousQuery { .. }
        | AdcmError::UnsupportedOperation { .. }
        | AdcmError::Validation { .. } => error.to_string(),
        _ => format!(
            "Could not {} {}, unexpected error: {}",
            verb(operation),
            entity,
            error
        ),
    };
    Diagnostic::error(summary).with_detail(detail)
}

/// "creating" -> "create", "reading" -> "read"
fn verb(operation: &str) -> String {
    match operation.strip_suffix("ing") {
        Some("creat") => "create".to_string(),
        Some("updat") => "update".to_string(),
        Some("delet") => "delete".to_string(),
        Some(stem) => stem.to_string(),
        None => operation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::DiagnosticSeverity;

    #[test]
    fn test_unexpected_error_detail() {
        let error = AdcmError::transport(Some(500), "HTTP 500 Internal Server Error");
        let diagnostic = to_diagnostic("creating", "cluster", &error);

        assert_eq!(diagnostic.severity, DiagnosticSeverity::Error);
        assert_eq!(diagnostic.summary, "Error creating cluster");
        assert_eq!(
            diagnostic.detail.as_deref(),
            Some("Could not create cluster, unexpected error: ADCM request failed: HTTP 500 Internal Server Error")
        );
    }

    #[test]
    fn test_resolution_errors_are_passed_through() {
        let error = AdcmError::NotFound {
            entity: "host".to_string(),
            criteria: "fqdn=host9.local".to_string(),
        };
        let diagnostic = to_diagnostic("reading", "host", &error);

        assert_eq!(diagnostic.summary, "Error reading host");
        assert_eq!(diagnostic.detail, Some(error.to_string()));
    }

    #[test]
    fn test_verb() {
        assert_eq!(verb("reading"), "read");
        assert_eq!(verb("deleting"), "delete");
        assert_eq!(verb("updating"), "update");
        assert_eq!(verb("listing"), "list");
    }
}
