use std::time::Duration;

/// Default upper bound for waiting on a freshly added service
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(30);

/// Default pause between readiness probes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// ReadinessPolicy - how long to wait for ADCM to finish adding a service
///
/// ADCM provisions services asynchronously. Configuration and component
/// lookups must wait until the service is visible, so the orchestrator
/// probes it every `poll_interval` until `max_wait` is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub max_wait: Duration,
    pub poll_interval: Duration,
}

impl ReadinessPolicy {
    pub fn new(max_wait: Duration, poll_interval: Duration) -> Self {
        Self {
            max_wait,
            poll_interval,
        }
    }

    /// Pause before the next probe, never sleeping past the budget
    pub fn next_pause(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed >= self.max_wait {
            return None;
        }
        Some(self.poll_interval.min(self.max_wait - elapsed))
    }
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL)
    }
}
