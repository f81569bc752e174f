//! OCR engine parameter and result types.

use serde::{Deserialize, Serialize};

/// Glyphs the engine should never emit. Dominated by the bracket and
/// punctuation characters Tesseract hallucinates from table ruling lines.
const DEFAULT_CHAR_BLACKLIST: &str = "[],():;'\\/~`?<>+*-=^%$#@!\u{201C}";

/// Engine parameters applied once at initialization.
///
/// Defaults target scanned tabular documents: a single uniform block of
/// text, interword spacing preserved so column gaps survive into the raw
/// output, and ruling-line glyphs blacklisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Language code (e.g. "eng", "deu").
    #[serde(default = "default_language")]
    pub language: String,

    /// OCR engine mode (0-3).
    #[serde(default = "default_oem")]
    pub oem: u8,

    /// Page segmentation mode (0-13). 6 treats the page as one uniform
    /// block of text.
    #[serde(default = "default_psm")]
    pub psm: u8,

    /// Characters the engine must not emit.
    #[serde(default = "default_char_blacklist")]
    pub char_blacklist: String,

    /// Keep interword spaces in the output instead of collapsing them.
    #[serde(default = "default_true")]
    pub preserve_interword_spaces: bool,
}

fn default_language() -> String {
    "eng".to_string()
}
fn default_oem() -> u8 {
    3
}
fn default_psm() -> u8 {
    6
}
fn default_char_blacklist() -> String {
    DEFAULT_CHAR_BLACKLIST.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            oem: default_oem(),
            psm: default_psm(),
            char_blacklist: default_char_blacklist(),
            preserve_interword_spaces: true,
        }
    }
}

impl OcrConfig {
    /// Check that mode values are within the ranges engines accept.
    pub fn validate(&self) -> Result<(), String> {
        if self.oem > 3 {
            return Err(format!("Invalid oem value: {} (expected 0-3)", self.oem));
        }
        if self.psm > 13 {
            return Err(format!("Invalid psm value: {} (expected 0-13)", self.psm));
        }
        Ok(())
    }
}

/// Final output of one recognition call.
///
/// The reformatting core consumes only `text`; `confidence` (the engine's
/// mean word confidence, 0-100) is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
    pub confidence: f64,
}
