use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::options::{SlugOptions, DEFAULT_SEPARATOR};
use crate::rules::{RuleSet, RuleSetBuilder};

/// Global configuration loaded from `~/.config/slugify/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Character placed between words.
    pub separator: char,
    pub lowercase: bool,
    /// Drop the separator at either end of the slug.
    pub trim: bool,
    /// Remove `<...>` markup before converting.
    pub strip_tags: bool,
    /// Fall back to Unicode decomposition for characters without a rule.
    pub decompose: bool,
    /// Built-in rule sets to activate, in order (later ones override earlier ones).
    pub rule_sets: Vec<String>,
    /// Optional JSON or TOML file with extra rules, applied after `rule_sets`.
    pub rules_file: Option<PathBuf>,
    /// Inline rules, applied last.
    pub rules: BTreeMap<String, String>,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            lowercase: true,
            trim: true,
            strip_tags: false,
            decompose: true,
            rule_sets: vec!["default".to_string()],
            rules_file: None,
            rules: BTreeMap::new(),
        }
    }
}

impl SlugConfig {
    /// Builds conversion options, assembling the rule set from `rule_sets`,
    /// `rules_file` and `rules`.
    pub fn to_options(&self) -> Result<SlugOptions> {
        let options = SlugOptions::new()
            .with_separator(self.separator)?
            .with_lowercase(self.lowercase)
            .with_trim(self.trim)
            .with_strip_tags(self.strip_tags)
            .with_decompose(self.decompose);

        Ok(options.with_rule_set(self.rule_set()?))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn rule_set(&self) -> Result<Arc<RuleSet>> {
        let only_default = self.rule_sets.len() == 1 && self.rule_sets[0] == "default";
        if only_default && self.rules_file.is_none() && self.rules.is_empty() {
            return Ok(RuleSet::default_set());
        }

        let mut builder = RuleSetBuilder::new();
        for name in &self.rule_sets {
            builder.activate(name)?;
        }
        if let Some(path) = &self.rules_file {
            builder.load_file(path)?;
        }
        builder.add_rules(self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        Ok(Arc::new(builder.build()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("slugify")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SlugConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SlugConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<SlugConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SlugConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify_with;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = SlugConfig::default();
        assert_eq!(cfg.separator, '-');
        assert!(cfg.lowercase);
        assert!(cfg.trim);
        assert!(!cfg.strip_tags);
        assert!(cfg.decompose);
        assert_eq!(cfg.rule_sets, vec!["default"]);
        assert!(cfg.rules_file.is_none());
        assert!(cfg.rules.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = SlugConfig::default();
        cfg.rules.insert("♥".into(), "love".into());
        cfg.rules_file = Some(PathBuf::from("/tmp/rules.json"));
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SlugConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_values() {
        let toml = r#"
            separator = "_"
            rule_sets = ["default", "german"]
        "#;
        let cfg: SlugConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.separator, '_');
        assert!(cfg.lowercase);
        assert_eq!(cfg.rule_sets, vec!["default", "german"]);

        let opts = cfg.to_options().unwrap();
        assert_eq!(slugify_with("Grüße aus Köln", &opts), "gruesse_aus_koeln");
    }

    #[test]
    fn config_inline_rules() {
        let toml = r#"
            lowercase = false

            [rules]
            "♥" = " love "
        "#;
        let cfg: SlugConfig = toml::from_str(toml).unwrap();
        let opts = cfg.to_options().unwrap();
        assert_eq!(slugify_with("I♥Rust", &opts), "I-love-Rust");
    }

    #[test]
    fn config_rules_file() {
        let mut rules = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        rules.write_all(r#"{ "☕": "coffee" }"#.as_bytes()).unwrap();
        rules.flush().unwrap();

        let cfg = SlugConfig {
            rules_file: Some(rules.path().to_path_buf()),
            ..SlugConfig::default()
        };
        let opts = cfg.to_options().unwrap();
        assert_eq!(slugify_with("☕ break", &opts), "coffee-break");
    }

    #[test]
    fn config_invalid_separator() {
        let cfg: SlugConfig = toml::from_str(r#"separator = "x""#).unwrap();
        assert!(cfg.to_options().is_err());
    }

    #[test]
    fn config_unknown_rule_set() {
        let cfg = SlugConfig {
            rule_sets: vec!["default".into(), "martian".into()],
            ..SlugConfig::default()
        };
        let err = cfg.to_options().unwrap_err();
        assert!(err.to_string().contains("martian"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"trim = false\nstrip_tags = true\n").unwrap();
        file.flush().unwrap();
        let cfg = load_from(file.path()).unwrap();
        assert!(!cfg.trim);
        assert!(cfg.strip_tags);
        assert_eq!(cfg.separator, '-');
    }

    #[test]
    fn load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"separator = \n").unwrap();
        file.flush().unwrap();
        assert!(load_from(file.path()).is_err());
    }
}
