//! Line parsing for dotenv files.
//!
//! Responsibilities:
//! - Turn raw file content into a list of `Entry` values, in file order.
//! - Strip comments (quote-aware), skip blank lines, split on the first `=`,
//!   trim keys and values, and strip one pair of surrounding double quotes.
//!
//! Does NOT handle:
//! - File I/O or path resolution (see file.rs).
//! - Writing entries to a store (see store.rs / dotenv.rs).
//!
//! Invariants:
//! - A `#` inside a double-quoted region is literal, not a comment start.
//! - Quote stripping removes exactly the two outer quotes; interior `\"`
//!   sequences are kept verbatim (no unescaping).
//! - Malformed lines (no `=`, an empty key after trimming, or a NUL byte in
//!   key or value) fail the parse with the 1-based line number; no line
//!   content is carried in the error.

/// A parsed `KEY=VALUE` assignment from a dotenv file.
///
/// Transient: entries exist between parse and apply, and are not consulted
/// by accessors afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// 1-based line number the assignment came from.
    pub line: usize,
}

/// A line that is not a valid assignment. Carries the line number only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MalformedLine {
    pub line: usize,
}

/// Parse full dotenv content into entries, first to last.
///
/// Later duplicate keys are not collapsed here; apply-time overwrite gives
/// last-occurrence-wins semantics.
pub(crate) fn parse_str(content: &str) -> Result<Vec<Entry>, MalformedLine> {
    let mut entries = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        if let Some(entry) = parse_line(raw, index + 1)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parse one line. Returns `Ok(None)` for comment-only and blank lines.
fn parse_line(raw: &str, number: usize) -> Result<Option<Entry>, MalformedLine> {
    let line = strip_inline_comment(raw);

    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return Err(MalformedLine { line: number });
    };

    let key = raw_key.trim();
    if key.is_empty() {
        return Err(MalformedLine { line: number });
    }
    let value = strip_quotes(raw_value.trim());

    // The process environment cannot represent NUL bytes; setenv rejects
    // them and Rust's set_var panics. Reject at parse time like empty keys.
    if key.contains('\0') || value.contains('\0') {
        return Err(MalformedLine { line: number });
    }

    Ok(Some(Entry {
        key: key.to_string(),
        value: value.to_string(),
        line: number,
    }))
}

/// Truncate at the first `#` outside a double-quoted region.
///
/// A line starting with `#` truncates to the empty string and is then
/// dropped by the blank-line check.
fn strip_inline_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Strip one pair of surrounding double quotes, if both are present.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
