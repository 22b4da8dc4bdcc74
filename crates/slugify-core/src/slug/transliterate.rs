//! Rule-set driven conversion of arbitrary text to ASCII.

use unicode_normalization::UnicodeNormalization;

use crate::rules::RuleSet;

/// Maps `text` to ASCII.
///
/// At each position the longest matching rule wins. ASCII without a rule is
/// copied; other characters keep the ASCII part of their NFKD form when
/// `decompose` is set and are dropped otherwise.
pub(crate) fn transliterate(text: &str, rules: &RuleSet, decompose: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((len, replacement)) = rules.longest_match(rest) {
            out.push_str(replacement);
            rest = &rest[len..];
            continue;
        }

        if c.is_ascii() {
            out.push(c);
        } else if decompose {
            out.extend(std::iter::once(c).nfkd().filter(char::is_ascii));
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}
