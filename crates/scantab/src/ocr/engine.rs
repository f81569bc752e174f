//! Recognition engine trait and lifecycle handle.
//!
//! The engine itself (Tesseract or otherwise) lives outside this crate;
//! [`RecognitionEngine`] is the seam a binding implements. Because engines
//! initialize asynchronously, callers hold an [`EngineHandle`] whose state
//! is explicit data (`Uninitialized`, `Ready`, or `Failed`) rather than
//! an ambient global that asserts when used too early.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::progress::ProgressSink;
use super::types::RecognizedText;
use crate::error::{Result, ScantabError};

/// An OCR engine capable of recognizing text in an image blob.
///
/// # Thread Safety
///
/// Engines must be `Send + Sync`; the handle shares them behind an `Arc`.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Short identifier for diagnostics ("tesseract", "mock", ...).
    fn name(&self) -> &str;

    /// Recognize the text in one image blob.
    ///
    /// Progress ticks in `[0, 1]` are delivered through `progress` while
    /// the call is in flight.
    async fn recognize(&self, image: &[u8], progress: &dyn ProgressSink) -> Result<RecognizedText>;
}

/// Lifecycle of an engine behind a handle.
#[derive(Clone)]
pub enum EngineState {
    /// Initialization has not completed yet.
    Uninitialized,
    /// The engine is attached and accepting recognitions.
    Ready(Arc<dyn RecognitionEngine>),
    /// Initialization failed; the message describes why.
    Failed(String),
}

impl std::fmt::Debug for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Ready(engine) => f.debug_tuple("Ready").field(&engine.name()).finish(),
            Self::Failed(message) => f.debug_tuple("Failed").field(message).finish(),
        }
    }
}

/// Owned handle to an asynchronously initialized OCR engine.
///
/// Construct the handle up front, hand it to whoever needs recognition,
/// and flip it to `Ready` (or `Failed`) when initialization finishes.
/// Recognizing through a handle that is not `Ready` fails fast with
/// [`ScantabError::EngineNotReady`].
///
/// The handle does not serialize recognitions: callers sharing one engine
/// are expected to keep at most one recognition in flight at a time.
pub struct EngineHandle {
    state: RwLock<EngineState>,
}

impl EngineHandle {
    /// Create a handle with no engine attached yet.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState::Uninitialized),
        }
    }

    /// Create a handle that is immediately ready.
    pub fn ready(engine: Arc<dyn RecognitionEngine>) -> Self {
        Self {
            state: RwLock::new(EngineState::Ready(engine)),
        }
    }

    /// Attach an initialized engine.
    pub fn set_ready(&self, engine: Arc<dyn RecognitionEngine>) {
        let mut state = self.state.write();
        tracing::debug!(engine = engine.name(), "OCR engine ready");
        *state = EngineState::Ready(engine);
    }

    /// Record a failed initialization.
    pub fn set_failed(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "OCR engine initialization failed");
        *self.state.write() = EngineState::Failed(message);
    }

    pub fn is_ready(&self) -> bool {
        matches!(&*self.state.read(), EngineState::Ready(_))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> EngineState {
        self.state.read().clone()
    }

    /// Recognize one image blob with the attached engine.
    ///
    /// # Errors
    ///
    /// - [`ScantabError::EngineNotReady`] if the handle is `Uninitialized`
    ///   or `Failed`; the caller must not request recognition before
    ///   initialization completes.
    /// - Whatever error the engine itself returns.
    pub async fn recognize(
        &self,
        image: &[u8],
        progress: &dyn ProgressSink,
    ) -> Result<RecognizedText> {
        let engine = match &*self.state.read() {
            EngineState::Ready(engine) => Arc::clone(engine),
            EngineState::Uninitialized => {
                return Err(ScantabError::EngineNotReady(
                    "engine initialization has not completed".to_string(),
                ));
            }
            EngineState::Failed(message) => {
                return Err(ScantabError::EngineNotReady(format!(
                    "engine initialization failed: {message}"
                )));
            }
        };

        engine.recognize(image, progress).await
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::progress::ProgressTracker;

    struct MockEngine {
        text: String,
        ticks: Vec<f64>,
    }

    #[async_trait]
    impl RecognitionEngine for MockEngine {
        fn name(&self) -> &str {
            "mock"
        }

        async fn recognize(
            &self,
            _image: &[u8],
            progress: &dyn ProgressSink,
        ) -> Result<RecognizedText> {
            for &tick in &self.ticks {
                progress.on_progress(tick);
            }
            Ok(RecognizedText {
                text: self.text.clone(),
                confidence: 90.0,
            })
        }
    }

    fn mock_engine(ticks: Vec<f64>) -> Arc<dyn RecognitionEngine> {
        Arc::new(MockEngine {
            text: "101  Smith   42".to_string(),
            ticks,
        })
    }

    #[tokio::test]
    async fn test_uninitialized_handle_fails_fast() {
        let handle = EngineHandle::new();
        assert!(!handle.is_ready());

        let err = handle.recognize(b"image", &()).await.unwrap_err();
        assert!(matches!(err, ScantabError::EngineNotReady(_)));
    }

    #[tokio::test]
    async fn test_failed_handle_reports_cause() {
        let handle = EngineHandle::new();
        handle.set_failed("traineddata missing");

        let err = handle.recognize(b"image", &()).await.unwrap_err();
        assert!(err.to_string().contains("traineddata missing"));
    }

    #[tokio::test]
    async fn test_ready_handle_delegates() {
        let handle = EngineHandle::ready(mock_engine(vec![]));
        assert!(handle.is_ready());

        let result = handle.recognize(b"image", &()).await.unwrap();
        assert_eq!(result.text, "101  Smith   42");
        assert_eq!(result.confidence, 90.0);
    }

    #[tokio::test]
    async fn test_set_ready_transitions_handle() {
        let handle = EngineHandle::new();
        assert!(matches!(handle.state(), EngineState::Uninitialized));

        handle.set_ready(mock_engine(vec![]));
        assert!(handle.is_ready());
        assert!(handle.recognize(b"image", &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_progress_ticks_reach_sink() {
        let handle = EngineHandle::ready(mock_engine(vec![0.25, 0.6]));
        let tracker = ProgressTracker::new();

        handle.recognize(b"image", &tracker).await.unwrap();
        assert_eq!(tracker.current(), Some(0.6));
    }

    #[tokio::test]
    async fn test_progress_cleared_after_completion_tick() {
        let handle = EngineHandle::ready(mock_engine(vec![0.25, 0.6, 1.0]));
        let tracker = ProgressTracker::new();

        handle.recognize(b"image", &tracker).await.unwrap();
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_engine_state_debug() {
        assert_eq!(format!("{:?}", EngineState::Uninitialized), "Uninitialized");
        let failed = EngineState::Failed("boom".to_string());
        assert!(format!("{:?}", failed).contains("boom"));
    }
}
