//! Joining alphanumeric runs with a single separator.

/// Joins the ASCII alphanumeric runs of `text` with `separator`.
///
/// - Every maximal run of other characters becomes one separator
/// - With `trim`, no separator is emitted before the first or after the last run
pub(crate) fn join_tokens(text: &str, separator: char, trim: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !(trim && out.is_empty()) {
                out.push(separator);
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }

    if pending_separator && !trim {
        out.push(separator);
    }

    out
}
