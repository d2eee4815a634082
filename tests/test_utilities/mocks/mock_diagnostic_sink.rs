use adcm_provider::prelude::*;
use std::cell::RefCell;

/// Mock DiagnosticSink keeping every emitted diagnostic
#[derive(Default)]
pub struct MockDiagnosticSink {
    pub diagnostics: RefCell<Vec<Diagnostic>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summaries(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.summary.clone())
            .collect()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}
