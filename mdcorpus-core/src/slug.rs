//! Slug normalization and deterministic de-duplication.

use regex::Regex;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Convert a string to a URL-safe slug
///
/// Rules:
/// - Lowercase
/// - Replace whitespace and underscores with hyphens
/// - Remove special characters (except hyphens)
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use mdcorpus_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Ni Hao Shi Jie"), "ni-hao-shi-jie");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// ```
pub fn slugify(input: &str) -> String {
    let cleaned = input
        .to_lowercase()
        .graphemes(true)
        .filter_map(|g| match g {
            " " | "_" | "\t" | "\n" => Some("-"),
            _ => {
                let c = g.chars().next()?;
                // Keep unicode alphabetics so pre-transliteration input
                // still produces a usable token
                (c.is_ascii_alphanumeric() || c == '-' || c.is_alphabetic()).then_some(g)
            }
        })
        .collect::<String>();

    let collapsed = Regex::new(r"-+").unwrap().replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Scope-local slug de-duplicator.
///
/// Repeated identical slugs within one slugger's lifetime gain a
/// counted suffix (`foo`, `foo-1`, `foo-2`, ...), so the output is
/// deterministic in insertion order.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and make the result unique within this scope.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        self.dedupe(&base)
    }

    /// Reserve `candidate` verbatim, appending a counter on repeats.
    ///
    /// Used for already-joined `folder/token` candidates where the
    /// slash must survive normalization.
    pub fn dedupe(&mut self, candidate: &str) -> String {
        let count = self.seen.entry(candidate.to_string()).or_insert(0);
        let unique = if *count == 0 {
            candidate.to_string()
        } else {
            format!("{candidate}-{count}")
        };
        *count += 1;
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust Programming"), "rust-programming");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("Rust & Safety"), "rust-safety");
        assert_eq!(slugify("C++ Programming"), "c-programming");
        assert_eq!(slugify("Node.js Tips"), "nodejs-tips");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn test_multiple_spaces_and_underscores() {
        assert_eq!(slugify("Hello    World"), "hello-world");
        assert_eq!(slugify("hello_world"), "hello-world");
    }

    #[test]
    fn test_leading_trailing_hyphens() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("-Leading Hyphen"), "leading-hyphen");
        assert_eq!(slugify("Trailing Hyphen-"), "trailing-hyphen");
    }

    #[test]
    fn test_unicode_alphabetics_survive() {
        assert_eq!(slugify("Café"), "café");
        assert_eq!(slugify("naïve"), "naïve");
    }

    #[test]
    fn test_empty_and_special_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_slugger_dedupes_in_order() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello World"), "hello-world");
        assert_eq!(slugger.slug("Hello World"), "hello-world-1");
        assert_eq!(slugger.slug("Hello  World"), "hello-world-2");
        assert_eq!(slugger.slug("Other"), "other");
    }

    #[test]
    fn test_slugger_dedupe_keeps_slashes() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.dedupe("group-a/post"), "group-a/post");
        assert_eq!(slugger.dedupe("group-a/post"), "group-a/post-1");
        // Same token in a different folder does not collide
        assert_eq!(slugger.dedupe("group-b/post"), "group-b/post");
    }

    #[test]
    fn test_separate_sluggers_are_independent() {
        let mut a = Slugger::new();
        let mut b = Slugger::new();
        assert_eq!(a.slug("post"), "post");
        assert_eq!(b.slug("post"), "post");
    }
}
