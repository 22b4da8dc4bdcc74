//! Conversion options.

use std::sync::Arc;

use thiserror::Error;

use crate::rules::RuleSet;

pub const DEFAULT_SEPARATOR: char = '-';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// Separators are limited to ASCII punctuation and space. `<` and `>`
    /// are excluded: a second pass with `strip_tags` would eat them.
    #[error("separator {0:?} must be ASCII punctuation other than '<' or '>', or a space")]
    InvalidSeparator(char),
}

/// How [`slugify_with`](crate::slugify_with) converts text.
///
/// Defaults: separator `-`, lowercase, trimmed, tags kept as text, NFKD
/// fallback for characters without a rule, built-in default rule set.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    separator: char,
    lowercase: bool,
    trim: bool,
    strip_tags: bool,
    decompose: bool,
    rule_set: Arc<RuleSet>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            lowercase: true,
            trim: true,
            strip_tags: false,
            decompose: true,
            rule_set: RuleSet::default_set(),
        }
    }
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Result<Self, OptionsError> {
        let allowed = (separator.is_ascii_punctuation() && !matches!(separator, '<' | '>'))
            || separator == ' ';
        if !allowed {
            return Err(OptionsError::InvalidSeparator(separator));
        }
        self.separator = separator;
        Ok(self)
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_strip_tags(mut self, strip_tags: bool) -> Self {
        self.strip_tags = strip_tags;
        self
    }

    /// Whether characters without a rule fall back to their NFKD form.
    /// When off they are dropped.
    pub fn with_decompose(mut self, decompose: bool) -> Self {
        self.decompose = decompose;
        self
    }

    pub fn with_rule_set(mut self, rule_set: Arc<RuleSet>) -> Self {
        self.rule_set = rule_set;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn trim(&self) -> bool {
        self.trim
    }

    pub fn strip_tags(&self) -> bool {
        self.strip_tags
    }

    pub fn decompose(&self) -> bool {
        self.decompose
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }
}
