//! Markup tag removal.

use std::borrow::Cow;

/// Removes every `<...>` span from `input`.
///
/// An unclosed `<` swallows the rest of the input. Text without `<` is
/// returned borrowed.
pub fn strip_tags(input: &str) -> Cow<'_, str> {
    if !input.contains('<') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    Cow::Owned(out)
}
