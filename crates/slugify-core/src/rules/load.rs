//! Custom rule files: a flat `{ "source": "replacement" }` table in JSON or TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::error::RuleSetError;
use super::set::RuleSetBuilder;

impl RuleSetBuilder {
    pub fn add_json_rules(&mut self, json: &str) -> Result<&mut Self, RuleSetError> {
        let rules: BTreeMap<String, String> = serde_json::from_str(json)?;
        self.add_rules(rules)
    }

    pub fn add_toml_rules(&mut self, toml: &str) -> Result<&mut Self, RuleSetError> {
        let rules: BTreeMap<String, String> = toml::from_str(toml)?;
        self.add_rules(rules)
    }

    /// Load rules from a file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load_file(&mut self, path: &Path) -> Result<&mut Self, RuleSetError> {
        let data = fs::read_to_string(path).map_err(|source| RuleSetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let before = self.len();
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            self.add_toml_rules(&data)?;
        } else {
            self.add_json_rules(&data)?;
        }
        tracing::debug!(
            "loaded rules from {} ({} new sources)",
            path.display(),
            self.len() - before
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn json_rules() {
        let mut builder = RuleSetBuilder::new();
        builder
            .add_json_rules(r#"{ "♥": "love", "ñ": "ny" }"#)
            .unwrap();
        let set = builder.build();
        assert_eq!(set.get("♥"), Some("love"));
        assert_eq!(set.get("ñ"), Some("ny"));
    }

    #[test]
    fn toml_rules() {
        let mut builder = RuleSetBuilder::new();
        builder.add_toml_rules("\"♥\" = \"love\"\n").unwrap();
        assert_eq!(builder.build().get("♥"), Some("love"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut builder = RuleSetBuilder::new();
        let err = builder.add_json_rules("[1, 2]").unwrap_err();
        assert!(matches!(err, RuleSetError::Json(_)));
    }

    #[test]
    fn non_ascii_replacement_in_file_is_rejected() {
        let mut builder = RuleSetBuilder::new();
        let err = builder.add_json_rules(r#"{ "a": "ä" }"#).unwrap_err();
        assert!(matches!(err, RuleSetError::NonAsciiReplacement { .. }));
    }

    #[test]
    fn load_file_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(r#"{ "☃": "snowman" }"#.as_bytes()).unwrap();
        json.flush().unwrap();

        let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml.write_all("\"☂\" = \"umbrella\"\n".as_bytes()).unwrap();
        toml.flush().unwrap();

        let mut builder = RuleSetBuilder::new();
        builder
            .load_file(json.path())
            .unwrap()
            .load_file(toml.path())
            .unwrap();
        let set = builder.build();
        assert_eq!(set.get("☃"), Some("snowman"));
        assert_eq!(set.get("☂"), Some("umbrella"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = RuleSetBuilder::new();
        let err = builder
            .load_file(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, RuleSetError::Io { .. }));
    }
}
