use crate::ports::outbound::{Diagnostic, DiagnosticSeverity, DiagnosticSink};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrDiagnosticSink adapter printing diagnostics to stderr
///
/// Colors the severity prefix when stderr is a terminal.
pub struct StderrDiagnosticSink {
    use_color: bool,
}

impl StderrDiagnosticSink {
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let prefix = match (diagnostic.severity, self.use_color) {
            (DiagnosticSeverity::Error, true) => "Error:".red().bold().to_string(),
            (DiagnosticSeverity::Warning, true) => "Warning:".yellow().bold().to_string(),
            (DiagnosticSeverity::Error, false) => "Error:".to_string(),
            (DiagnosticSeverity::Warning, false) => "Warning:".to_string(),
        };

        match &diagnostic.detail {
            Some(detail) => format!("{} {}\n\n{}", prefix, diagnostic.summary, detail),
            None => format!("{} {}", prefix, diagnostic.summary),
        }
    }
}

impl Default for StderrDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for StderrDiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        eprintln!("\n{}", self.render(diagnostic));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_error_with_detail() {
        let sink = StderrDiagnosticSink::with_color(false);
        let diagnostic = Diagnostic::error("Error creating cluster")
            .with_detail("Could not create cluster, unexpected error: boom");

        assert_eq!(
            sink.render(&diagnostic),
            "Error: Error creating cluster\n\nCould not create cluster, unexpected error: boom"
        );
    }

    #[test]
    fn test_render_plain_warning() {
        let sink = StderrDiagnosticSink::with_color(false);
        assert_eq!(
            sink.render(&Diagnostic::warning("Unknown config field 'hots'")),
            "Warning: Unknown config field 'hots'"
        );
    }

    #[test]
    fn test_colored_prefix_keeps_text() {
        let sink = StderrDiagnosticSink::with_color(true);
        let rendered = sink.render(&Diagnostic::error("Error reading host"));
        assert!(rendered.contains("Error:"));
        assert!(rendered.ends_with("Error reading host"));
        assert!(rendered.contains('\u{1b}'));
    }
}
