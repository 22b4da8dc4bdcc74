//! Text to slug conversion.
//!
//! Turns arbitrary Unicode text into a URL-safe, lowercase, separator-delimited
//! ASCII token sequence using an immutable transliteration [`RuleSet`].

pub mod config;
pub mod logging;

pub mod options;
pub mod rules;
pub mod slug;

pub use options::{OptionsError, SlugOptions};
pub use rules::{available_rule_sets, RuleSet, RuleSetBuilder, RuleSetError};
pub use slug::{slugify, slugify_with, strip_tags, Slugifier};
