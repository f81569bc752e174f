//! scantab - OCR tabular-text reformatting
//!
//! scantab turns raw OCR output from scanned tabular documents (property
//! records, ledgers, registers) into structured, delimited rows without a
//! layout-aware OCR engine. Each line is re-segmented at its widest
//! whitespace runs into a configured number of columns, and columns
//! declared numeric get common digit-confusion repairs (`o`→`0`, `s`→`5`,
//! `|`→`1`, ...).
//!
//! # Quick Start
//!
//! ```rust
//! use scantab::{reformat_text, FormatConfig};
//!
//! let config = FormatConfig {
//!     format: "pid,description,value".to_string(),
//!     description_column_name: "description".to_string(),
//!     number_column_names: "value".to_string(),
//!     ..Default::default()
//! };
//!
//! let ocr_text = "101 | Riverside lot    42\n102 | Corner parcel    S7";
//! let records = reformat_text(ocr_text, &config);
//! assert_eq!(records, "101,Riverside lot,42\n102,Corner parcel,57");
//! ```
//!
//! # Architecture
//!
//! - **Reformatting core** (`reformat`): pure, synchronous, and infallible;
//!   malformed lines are dropped and a document that parses too poorly
//!   falls back to the original text.
//! - **Configuration** (`config`): [`FormatConfig`] describes the expected
//!   column layout; loadable from TOML/JSON.
//! - **OCR seam** (`ocr`): trait + lifecycle handle for the external
//!   recognition engine, plus progress observation. No engine binding is
//!   included.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod ocr;
pub mod reformat;

pub use config::FormatConfig;
pub use error::{Result, ScantabError};
pub use ocr::{
    EngineHandle, EngineState, OcrConfig, ProgressSink, ProgressTracker, RecognitionEngine,
    RecognizedText,
};
pub use reformat::{correct_number, reformat_text, split_columns};
