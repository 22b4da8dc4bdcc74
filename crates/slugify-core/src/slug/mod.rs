//! Slug generation.
//!
//! Conversion runs in fixed stages: optional tag stripping, rule-set
//! transliteration to ASCII, optional lowercasing, then joining alphanumeric
//! runs with the separator.

mod strip;
mod tokenize;
mod transliterate;

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::options::SlugOptions;

pub use strip::strip_tags;
use tokenize::join_tokens;
use transliterate::transliterate;

static DEFAULT_OPTIONS: LazyLock<SlugOptions> = LazyLock::new(SlugOptions::default);

/// Converts `text` to a slug with the default options.
///
/// # Examples
///
/// - `slugify("first post title, with some special characters!!!")` → `"first-post-title-with-some-special-characters"`
/// - `slugify("Café München")` → `"cafe-munchen"`
/// - `slugify("   ")` → `""`
pub fn slugify(text: &str) -> String {
    slugify_with(text, &DEFAULT_OPTIONS)
}

/// Converts `text` to a slug.
///
/// Never fails: characters that cannot be mapped are dropped or become part
/// of a separator run, so the result may be empty.
pub fn slugify_with(text: &str, options: &SlugOptions) -> String {
    let text = if options.strip_tags() {
        strip_tags(text)
    } else {
        Cow::Borrowed(text)
    };

    let mut ascii = transliterate(&text, options.rule_set(), options.decompose());
    if options.lowercase() {
        ascii.make_ascii_lowercase();
    }

    let slug = join_tokens(&ascii, options.separator(), options.trim());
    tracing::trace!(input_len = text.len(), slug = %slug, "slugified");
    slug
}

/// A reusable set of options.
#[derive(Debug, Clone, Default)]
pub struct Slugifier {
    options: SlugOptions,
}

impl Slugifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SlugOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    pub fn slugify(&self, text: &str) -> String {
        slugify_with(text, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleSet, RuleSetBuilder};
    use std::sync::Arc;

    #[test]
    fn slugify_sentence() {
        assert_eq!(
            slugify("first post title, with some special characters!!!"),
            "first-post-title-with-some-special-characters"
        );
    }

    #[test]
    fn slugify_accents() {
        assert_eq!(slugify("Café München"), "cafe-munchen");
        assert_eq!(slugify("Ærøskøbing Œuvre"), "aeroskobing-oeuvre");
    }

    #[test]
    fn slugify_empty_and_blank() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("☃ ☂ ☀"), "");
    }

    #[test]
    fn slugify_already_a_slug() {
        assert_eq!(slugify("hello-world-42"), "hello-world-42");
    }

    #[test]
    fn slugify_non_latin() {
        assert_eq!(slugify("Αθήνα"), "athina");
        assert_eq!(slugify("Щука и ёж"), "shchuka-i-yozh");
    }

    #[test]
    fn slugify_symbols() {
        assert_eq!(slugify("Price: 5€ — 50% off"), "price-5euro-50-off");
        assert_eq!(slugify("it’s “quoted”"), "its-quoted");
        assert_eq!(slugify("½ cup"), "1-2-cup");
    }

    #[test]
    fn custom_separator() {
        let opts = SlugOptions::new().with_separator('_').unwrap();
        assert_eq!(slugify_with("Hello World", &opts), "hello_world");
        assert_eq!(slugify_with("a - b _ c", &opts), "a_b_c");
    }

    #[test]
    fn keep_case() {
        let opts = SlugOptions::new().with_lowercase(false);
        assert_eq!(slugify_with("Hello Wörld", &opts), "Hello-World");
    }

    #[test]
    fn no_trim() {
        let opts = SlugOptions::new().with_trim(false);
        assert_eq!(slugify_with("  hello world!!", &opts), "-hello-world-");
    }

    #[test]
    fn strip_tags_option() {
        let text = "<h1>Hello</h1> <em>World</em>";
        assert_eq!(slugify(text), "h1-hello-h1-em-world-em");
        let opts = SlugOptions::new().with_strip_tags(true);
        assert_eq!(slugify_with(text, &opts), "hello-world");
    }

    #[test]
    fn decompose_option() {
        let plain = SlugOptions::new().with_rule_set(Arc::new(RuleSet::default()));
        assert_eq!(slugify_with("Ǘber naïve", &plain), "uber-naive");
        let strict = plain.with_decompose(false);
        assert_eq!(slugify_with("Ǘber naïve", &strict), "ber-nave");
    }

    #[test]
    fn german_rule_set() {
        let mut builder = RuleSetBuilder::with_default();
        builder.activate("german").unwrap();
        let slugifier = Slugifier::with_options(
            SlugOptions::new().with_rule_set(Arc::new(builder.build())),
        );
        assert_eq!(slugifier.slugify("Café München"), "cafe-muenchen");
    }

    #[test]
    fn slugifier_defaults_match_free_function() {
        let slugifier = Slugifier::new();
        for text in ["Hello World", "Café", "", "  x  "] {
            assert_eq!(slugifier.slugify(text), slugify(text));
        }
    }
}
