use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop switch checked between lines.
///
/// Cancelling never leaves a half-built result behind: the run reports
/// [`AnalyzeError::Cancelled`](crate::analyze::AnalyzeError::Cancelled) instead.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
