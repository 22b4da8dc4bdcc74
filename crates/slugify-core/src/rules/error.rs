//! Error type for building and loading rule sets.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while adding rules to a [`RuleSetBuilder`](super::RuleSetBuilder).
///
/// Conversion itself never fails; these only surface while a rule set is
/// being assembled.
#[derive(Debug, Error)]
pub enum RuleSetError {
    /// A rule with an empty source would match everywhere.
    #[error("rule source must not be empty")]
    EmptySource,
    /// Replacements must be ASCII so slugs stay ASCII.
    #[error("replacement for {from:?} is not ASCII: {to:?}")]
    NonAsciiReplacement { from: String, to: String },
    /// No built-in rule set with this name.
    #[error("unknown rule set {0:?}")]
    UnknownRuleSet(String),
    #[error("read rules file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse JSON rules")]
    Json(#[from] serde_json::Error),
    #[error("parse TOML rules")]
    Toml(#[from] toml::de::Error),
}
