//! Recognition progress observation.

use parking_lot::RwLock;

/// Observer for engine progress ticks.
///
/// Purely observational: values arrive in `[0, 1]` while a recognition is
/// in flight and never affect the result.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, value: f64);
}

/// No-op sink for callers that do not track progress.
impl ProgressSink for () {
    fn on_progress(&self, _value: f64) {}
}

/// Retains the most recent progress value of an in-flight recognition.
///
/// A tick of 1.0 or above clears the stored value: once recognition has
/// completed there is no current progress to report.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    current: RwLock<Option<f64>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest observed progress, or `None` outside an active recognition.
    pub fn current(&self) -> Option<f64> {
        *self.current.read()
    }
}

impl ProgressSink for ProgressTracker {
    fn on_progress(&self, value: f64) {
        let mut current = self.current.write();
        *current = if value >= 1.0 { None } else { Some(value) };
    }
}
