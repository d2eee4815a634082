use adcm_provider::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter capturing every message by kind
///
/// Clones share their buffers, so a test can hand one clone to the use case
/// and inspect the other afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub steps: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// `(current, total)` pairs in the order they were reported
    pub fn steps(&self) -> Vec<(usize, usize)> {
        self.steps.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_prefix("Error: ")
    }

    pub fn completions(&self) -> Vec<String> {
        self.with_prefix("Completed: ")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_messages()
            .iter()
            .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.steps.lock().unwrap().push((current, total));
        if let Some(m) = message {
            self.messages
                .lock()
                .unwrap()
                .push(format!("Step {}/{}: {}", current, total, m));
        }
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
