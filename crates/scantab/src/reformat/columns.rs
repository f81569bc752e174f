//! Best-effort column splitting via separator-run analysis.
//!
//! Scanned tabular documents render column ruling lines as pipe, parenthesis,
//! or brace glyphs in OCR output, so those characters are treated as
//! whitespace-equivalent separators. A line is split at its N−1 widest
//! separator runs: picking the widest gaps (rather than the first N−1)
//! tolerates small incidental gaps between words inside a field.

/// A maximal run of separator-class characters within one line.
///
/// Byte offsets delimit the run for slicing; `chars` ranks it, so a run of
/// multi-byte whitespace does not outweigh an equally long ASCII run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeparatorRun {
    start: usize,
    end: usize,
    chars: usize,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '(' | ')' | '{' | '}')
}

/// Scan a line left to right and collect every maximal separator run.
///
/// An explicit linear scan keeps the widest-run selection auditable without
/// depending on a pattern engine's iteration semantics.
fn separator_runs(line: &str) -> Vec<SeparatorRun> {
    let mut runs = Vec::new();
    let mut current: Option<SeparatorRun> = None;

    for (idx, c) in line.char_indices() {
        if is_separator(c) {
            let end = idx + c.len_utf8();
            match current.as_mut() {
                Some(run) => {
                    run.end = end;
                    run.chars += 1;
                }
                None => {
                    current = Some(SeparatorRun {
                        start: idx,
                        end,
                        chars: 1,
                    });
                }
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }

    if let Some(run) = current {
        runs.push(run);
    }

    runs
}

/// Split one line into at most `num_cols` trimmed fields.
///
/// The N−1 widest separator runs become the field boundaries, with ties
/// going to the earlier run; boundaries are then applied in line order. A
/// line with fewer than N−1 separator runs yields fewer fields; it is the
/// caller's job to drop short rows, not this function's to pad them.
pub fn split_columns(line: &str, num_cols: usize) -> Vec<String> {
    let mut runs = separator_runs(line);
    runs.sort_by(|a, b| b.chars.cmp(&a.chars).then(a.start.cmp(&b.start)));
    runs.truncate(num_cols.saturating_sub(1));
    runs.sort_by_key(|run| run.start);

    let mut fields = Vec::with_capacity(runs.len() + 1);
    let mut last = 0;
    for run in &runs {
        fields.push(line[last..run.start].trim().to_string());
        last = run.end;
    }
    fields.push(line[last..].trim().to_string());

    fields
}
