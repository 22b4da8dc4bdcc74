//! CLI for slugify.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use slugify_core::config::{self, SlugConfig};
use std::io::{self, Write};
use std::path::PathBuf;

use commands::{run_completions, run_config, run_convert, run_man, run_rule_sets, ConvertOverrides};

/// Top-level CLI for slugify.
#[derive(Debug, Parser)]
#[command(name = "slugify")]
#[command(about = "Convert text into URL-safe slugs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert text to a slug. Reads stdin line by line when no TEXT is given.
    Convert {
        /// Text to convert; multiple words are joined with spaces.
        text: Vec<String>,

        /// Separator between words (ASCII punctuation except `<` `>`, or space).
        #[arg(short, long, value_name = "CHAR")]
        separator: Option<char>,

        /// Keep the original letter case.
        #[arg(long, overrides_with = "lowercase")]
        keep_case: bool,

        /// Lowercase the slug even if the config keeps case.
        #[arg(long, overrides_with = "keep_case")]
        lowercase: bool,

        /// Keep a separator at the start or end of the slug.
        #[arg(long, overrides_with = "trim")]
        no_trim: bool,

        /// Trim edge separators even if the config keeps them.
        #[arg(long, overrides_with = "no_trim")]
        trim: bool,

        /// Remove HTML/XML tags before converting.
        #[arg(long, overrides_with = "no_strip_tags")]
        strip_tags: bool,

        /// Keep tags as text even if the config strips them.
        #[arg(long, overrides_with = "strip_tags")]
        no_strip_tags: bool,

        /// Drop characters without a rule instead of decomposing them.
        #[arg(long, overrides_with = "decompose")]
        no_decompose: bool,

        /// Decompose characters without a rule even if the config drops them.
        #[arg(long, overrides_with = "no_decompose")]
        decompose: bool,

        /// Activate a built-in rule set on top of the configured ones (repeatable).
        #[arg(short = 'r', long = "rule-set", value_name = "NAME")]
        rule_sets: Vec<String>,

        /// JSON or TOML file with extra rules.
        #[arg(long, value_name = "PATH")]
        rules_file: Option<PathBuf>,
    },

    /// List the built-in rule sets.
    RuleSets,

    /// Show the config file path and the effective settings.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Convert {
                text,
                separator,
                keep_case,
                lowercase,
                no_trim,
                trim,
                strip_tags,
                no_strip_tags,
                no_decompose,
                decompose,
                rule_sets,
                rules_file,
            } => {
                let mut cfg = config_or_default(config::load_or_init(), &mut io::stderr());
                let overrides = ConvertOverrides {
                    separator,
                    lowercase: switch(lowercase, keep_case),
                    trim: switch(trim, no_trim),
                    strip_tags: switch(strip_tags, no_strip_tags),
                    decompose: switch(decompose, no_decompose),
                    rule_sets,
                    rules_file,
                };
                overrides.apply(&mut cfg);
                tracing::debug!("effective config: {:?}", cfg);
                run_convert(&cfg, &text)?;
            }
            CliCommand::RuleSets => run_rule_sets()?,
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// `Some(true)` for `--on`, `Some(false)` for `--off`, `None` to keep the config value.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// A missing or broken config must not stop conversion; fall back to defaults.
/// The warning also goes to `warn_out` since the log file is easy to miss.
fn config_or_default<W: Write>(loaded: Result<SlugConfig>, warn_out: &mut W) -> SlugConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        let _ = writeln!(warn_out, "slugify warning: config unavailable, using defaults: {:#}", err);
        SlugConfig::default()
    })
}

#[cfg(test)]
mod tests;
