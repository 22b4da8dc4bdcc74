//! Transliteration rule sets.
//!
//! A [`RuleSet`] maps source sequences (one or more chars) to ASCII
//! replacements. It is assembled with a [`RuleSetBuilder`] from the built-in
//! tables, individual rules and rule files, then frozen.

mod builtin;
mod error;
mod load;
mod set;

pub use error::RuleSetError;
pub use set::{RuleSet, RuleSetBuilder};

/// Names accepted by [`RuleSetBuilder::activate`].
pub fn available_rule_sets() -> &'static [&'static str] {
    builtin::NAMES
}

/// Number of rules in a built-in table, `None` for an unknown name.
pub fn rule_set_len(name: &str) -> Option<usize> {
    builtin::table(name).map(<[_]>::len)
}
