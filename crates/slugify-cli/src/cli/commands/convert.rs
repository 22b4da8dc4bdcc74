//! Convert command: slugify arguments or stdin lines.

use anyhow::{Context, Result};
use slugify_core::config::SlugConfig;
use slugify_core::Slugifier;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line flags layered over the loaded config.
#[derive(Debug, Default)]
pub struct ConvertOverrides {
    pub separator: Option<char>,
    pub lowercase: Option<bool>,
    pub trim: Option<bool>,
    pub strip_tags: Option<bool>,
    pub decompose: Option<bool>,
    pub rule_sets: Vec<String>,
    pub rules_file: Option<PathBuf>,
}

impl ConvertOverrides {
    /// `None` keeps the config value; rule sets are appended to the configured ones.
    pub fn apply(&self, cfg: &mut SlugConfig) {
        if let Some(separator) = self.separator {
            cfg.separator = separator;
        }
        if let Some(lowercase) = self.lowercase {
            cfg.lowercase = lowercase;
        }
        if let Some(trim) = self.trim {
            cfg.trim = trim;
        }
        if let Some(strip_tags) = self.strip_tags {
            cfg.strip_tags = strip_tags;
        }
        if let Some(decompose) = self.decompose {
            cfg.decompose = decompose;
        }
        for name in &self.rule_sets {
            if !cfg.rule_sets.contains(name) {
                cfg.rule_sets.push(name.clone());
            }
        }
        if let Some(path) = &self.rules_file {
            cfg.rules_file = Some(path.clone());
        }
    }
}

/// Print the slug of `text` joined with spaces, or of every stdin line when
/// `text` is empty.
pub fn run_convert(cfg: &SlugConfig, text: &[String]) -> Result<()> {
    let slugifier = Slugifier::with_options(cfg.to_options()?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if text.is_empty() {
        let stdin = io::stdin();
        let count = convert_lines(&slugifier, stdin.lock(), &mut out)?;
        tracing::debug!("converted {} lines from stdin", count);
    } else {
        writeln!(out, "{}", slugifier.slugify(&text.join(" ")))?;
    }
    out.flush()?;
    Ok(())
}

/// Invalid UTF-8 is decoded lossily so one bad line never stops the stream.
fn convert_lines<R: BufRead, W: Write>(
    slugifier: &Slugifier,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).context("read stdin")?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        writeln!(out, "{}", slugifier.slugify(line))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn convert(slugifier: &Slugifier, input: &str) -> String {
        let mut out = Vec::new();
        convert_lines(slugifier, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_slug_per_line() {
        let slugifier = Slugifier::new();
        assert_eq!(
            convert(&slugifier, "Hello World\nCafé München\n\n"),
            "hello-world\ncafe-munchen\n\n"
        );
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_stream() {
        let mut out = Vec::new();
        let count = convert_lines(
            &Slugifier::new(),
            Cursor::new(&b"Hello\n\xe9t\xe9\nWorld\n"[..]),
            &mut out,
        )
        .unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nt\nworld\n");
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        assert_eq!(
            convert(&Slugifier::new(), "Hello World\r\nLast line"),
            "hello-world\nlast-line\n"
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(convert(&Slugifier::new(), ""), "");
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let mut cfg = SlugConfig::default();
        let overrides = ConvertOverrides {
            separator: Some('_'),
            lowercase: Some(false),
            rule_sets: vec!["german".into(), "default".into()],
            ..ConvertOverrides::default()
        };
        overrides.apply(&mut cfg);

        assert_eq!(cfg.separator, '_');
        assert!(!cfg.lowercase);
        assert!(cfg.trim);
        assert_eq!(cfg.rule_sets, vec!["default", "german"]);

        let slugifier = Slugifier::with_options(cfg.to_options().unwrap());
        assert_eq!(convert(&slugifier, "Grüß Gott\n"), "Gruess_Gott\n");
    }

    #[test]
    fn overrides_revert_config_settings() {
        let mut cfg = SlugConfig {
            lowercase: false,
            trim: false,
            strip_tags: true,
            decompose: false,
            ..SlugConfig::default()
        };
        let overrides = ConvertOverrides {
            lowercase: Some(true),
            trim: Some(true),
            strip_tags: Some(false),
            decompose: Some(true),
            ..ConvertOverrides::default()
        };
        overrides.apply(&mut cfg);
        assert_eq!(cfg, SlugConfig::default());
    }

    #[test]
    fn no_overrides_keep_config() {
        let mut cfg = SlugConfig::default();
        ConvertOverrides::default().apply(&mut cfg);
        assert_eq!(cfg, SlugConfig::default());
    }
}
