//! OCR collaborator interfaces.
//!
//! scantab does not ship an OCR engine. This module specifies the seam a
//! binding implements, the [`RecognitionEngine`] trait, plus the
//! [`EngineHandle`] lifecycle wrapper and [`ProgressSink`] observation
//! types the rest of an application wires together. The reformatting core
//! consumes only the recognized text.

pub mod engine;
pub mod progress;
pub mod types;

pub use engine::{EngineHandle, EngineState, RecognitionEngine};
pub use progress::{ProgressSink, ProgressTracker};
pub use types::{OcrConfig, RecognizedText};
