//! Digit-confusion repair for fields expected to hold numbers.
//!
//! Tesseract-class engines routinely confuse visually similar glyphs in
//! numeric contexts (`o` for `0`, `s` for `5`, `|` for `1`). For columns the
//! config declares numeric, those confusions can be reversed unambiguously,
//! a correction that would be wrong for free text.

/// Ordered substitution table. Applied after lowercasing.
const SUBSTITUTIONS: [(&str, &str); 10] = [
    (" ", ""),
    (",", "."),
    ("|", "1"),
    ("i", "1"),
    ("!", "1"),
    ("g", "6"),
    ("s", "5"),
    ("o", "0"),
    ("b", "8"),
    ("z", "2"),
];

/// Repair common OCR confusions in a numeric field.
///
/// Lowercases the field, then applies each substitution to the **first**
/// occurrence only: a field with several instances of the same confusable
/// character is repaired partially. That matches the observed production
/// behavior; re-running the function on its own output may remap characters
/// and is not idempotent.
///
/// The result is not validated as a number; the caller always gets a
/// string back.
pub fn correct_number(field: &str) -> String {
    let mut text = field.to_lowercase();
    for (from, to) in SUBSTITUTIONS {
        text = text.replacen(from, to, 1);
    }
    text
}
