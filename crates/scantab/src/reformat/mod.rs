//! Reformatting core: raw OCR text to delimited tabular records.
//!
//! A two-stage, purely functional pipeline over an input string:
//!
//! 1. **Column splitting** ([`split_columns`]): each line is sliced at its
//!    N−1 widest separator runs into N trimmed fields.
//! 2. **Field normalization** ([`correct_number`]): configured numeric
//!    columns get digit-confusion repair.
//!
//! Lines that do not split into exactly N fields are dropped, and if fewer
//! than half of the input lines survive, the whole transformation is
//! discarded in favor of the original text. The pipeline never errors:
//! every failure mode is either a dropped line or the document-level
//! fallback.

mod columns;
mod numeric;

pub use columns::split_columns;
pub use numeric::correct_number;

use crate::config::FormatConfig;

/// Reformat raw OCR text into newline-separated, comma-delimited records.
///
/// Holds no state and performs no I/O; safe to call concurrently.
///
/// # Example
///
/// ```rust
/// use scantab::{reformat_text, FormatConfig};
///
/// let config = FormatConfig {
///     format: "pid,description,value".to_string(),
///     number_column_names: "value".to_string(),
///     ..Default::default()
/// };
///
/// let text = "101 | Riverside lot   4,ooo\n102 | Corner parcel   1,2oo";
/// assert_eq!(
///     reformat_text(text, &config),
///     "101,Riverside lot,4.0oo\n102,Corner parcel,1.20o"
/// );
/// ```
pub fn reformat_text(text: &str, config: &FormatConfig) -> String {
    if config.raw {
        return text.to_string();
    }

    let num_cols = config.column_count();
    let description_index = config.description_index();

    // Split on '\n' rather than lines(): a trailing newline counts as an
    // empty final line in the acceptance denominator below.
    let parsed: Vec<Vec<String>> = text
        .split('\n')
        .map(|line| split_columns(line, num_cols))
        .collect();
    let total_lines = parsed.len();
    tracing::debug!(total_lines, num_cols, rows = ?parsed, "split OCR text into candidate rows");

    let mut valid: Vec<Vec<String>> = parsed
        .into_iter()
        .filter(|row| row.len() == num_cols)
        .collect();

    if let (Some(index), Some(suffix)) = (description_index, config.append_to_description.as_deref())
    {
        if !suffix.is_empty() {
            for row in &mut valid {
                row[index] = format!("{} /{}", row[index], suffix);
            }
        }
    }

    let number_indexes = config.number_column_indexes();
    for row in &mut valid {
        for &index in &number_indexes {
            row[index] = correct_number(&row[index]);
        }
    }

    // Accept the transformation only if at least half of the input lines
    // split into the expected column count.
    if valid.len() * 2 < total_lines {
        tracing::warn!(
            valid_lines = valid.len(),
            total_lines,
            "too few lines split cleanly; returning original text"
        );
        return text.to_string();
    }

    let records: Vec<String> = valid.iter().map(|row| row.join(",")).collect();
    records.join("\n")
}
