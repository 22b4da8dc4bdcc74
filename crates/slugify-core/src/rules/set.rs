//! Immutable rule set and its builder.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use super::builtin;
use super::error::RuleSetError;

static DEFAULT_RULE_SET: LazyLock<Arc<RuleSet>> = LazyLock::new(|| {
    let mut builder = RuleSetBuilder::new();
    builder.insert_table(builtin::DEFAULT);
    let set = builder.build();
    tracing::debug!("built default rule set with {} rules", set.len());
    Arc::new(set)
});

/// Ordered transliteration table from source sequences to ASCII replacements.
///
/// Built once through [`RuleSetBuilder`] and read-only afterwards, so one
/// instance can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, String)>,
    index: HashMap<String, usize>,
    first_chars: HashSet<char>,
    max_source_chars: usize,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// The built-in default table, shared process-wide.
    pub fn default_set() -> Arc<RuleSet> {
        Arc::clone(&DEFAULT_RULE_SET)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replacement for an exact source sequence.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.index.get(source).map(|&i| self.rules[i].1.as_str())
    }

    /// Rules in precedence (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Longest rule source that is a prefix of `input`.
    ///
    /// Returns the matched length in bytes and the replacement.
    pub fn longest_match(&self, input: &str) -> Option<(usize, &str)> {
        let first = input.chars().next()?;
        if !self.first_chars.contains(&first) {
            return None;
        }

        // Byte offsets after 1, 2, ..., max_source_chars chars.
        let mut ends: Vec<usize> = input
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .take(self.max_source_chars)
            .collect();

        while let Some(end) = ends.pop() {
            if let Some(&i) = self.index.get(&input[..end]) {
                return Some((end, self.rules[i].1.as_str()));
            }
        }
        None
    }
}

/// Accumulates rules before freezing them into a [`RuleSet`].
///
/// Re-adding a source replaces its replacement in place, so later overlays
/// win while the original precedence position is kept.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with the built-in default table.
    pub fn with_default() -> Self {
        let mut builder = Self::new();
        builder.insert_table(builtin::DEFAULT);
        builder
    }

    /// Start from an existing rule set, e.g. to extend the default one.
    pub fn from_rule_set(set: &RuleSet) -> Self {
        Self {
            rules: set.rules.clone(),
            index: set.index.clone(),
        }
    }

    pub fn add_rule(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<&mut Self, RuleSetError> {
        let from = from.into();
        let to = to.into();
        if from.is_empty() {
            return Err(RuleSetError::EmptySource);
        }
        if !to.is_ascii() {
            return Err(RuleSetError::NonAsciiReplacement { from, to });
        }
        self.insert(from, to);
        Ok(self)
    }

    pub fn add_rules<I, K, V>(&mut self, rules: I) -> Result<&mut Self, RuleSetError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (from, to) in rules {
            self.add_rule(from, to)?;
        }
        Ok(self)
    }

    /// Layer a built-in named rule set (see [`available_rule_sets`](super::available_rule_sets)).
    pub fn activate(&mut self, name: &str) -> Result<&mut Self, RuleSetError> {
        let table =
            builtin::table(name).ok_or_else(|| RuleSetError::UnknownRuleSet(name.to_string()))?;
        self.insert_table(table);
        tracing::debug!("activated rule set {} ({} rules)", name, table.len());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn build(self) -> RuleSet {
        let first_chars = self
            .rules
            .iter()
            .filter_map(|(from, _)| from.chars().next())
            .collect();
        let max_source_chars = self
            .rules
            .iter()
            .map(|(from, _)| from.chars().count())
            .max()
            .unwrap_or(0);

        RuleSet {
            rules: self.rules,
            index: self.index,
            first_chars,
            max_source_chars,
        }
    }

    /// Built-in tables are checked by tests, not on every insert.
    pub(crate) fn insert_table(&mut self, table: &[(&str, &str)]) {
        for (from, to) in table {
            self.insert((*from).to_string(), (*to).to_string());
        }
    }

    fn insert(&mut self, from: String, to: String) {
        match self.index.get(&from) {
            Some(&i) => self.rules[i].1 = to,
            None => {
                self.index.insert(from.clone(), self.rules.len());
                self.rules.push((from, to));
            }
        }
    }
}
