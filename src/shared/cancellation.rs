use crate::shared::error::AdcmError;
use crate::shared::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External cancellation signal consulted before every ADCM request.
///
/// Clones share the same flag, so a handle kept by the caller (for example a
/// Ctrl-C handler) can stop an in-flight provisioning run between requests.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal that also trips once `budget` has elapsed from now
    pub fn with_deadline(budget: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + budget),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fails with [`AdcmError::Cancelled`] once the signal has tripped
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(AdcmError::Cancelled);
        }
        Ok(())
    }
}
