//! Frontmatter parsing from markdown files.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n(.*)$").unwrap())
}

/// Parsed frontmatter of a document.
///
/// The full mapping is kept as-is and passed through to the emitted
/// record unmodified. Only three keys are interpreted by the indexer:
/// `slug`, `title`, and `draft`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    mapping: Mapping,
}

impl Frontmatter {
    /// Explicit slug, if present and non-empty.
    pub fn slug(&self) -> Option<&str> {
        self.string_field("slug")
    }

    /// Document title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.string_field("title")
    }

    /// Whether the document is marked as an unpublished draft.
    ///
    /// Any truthy `draft` value counts; see [`is_truthy`].
    pub fn is_draft(&self) -> bool {
        self.mapping.get("draft").map(is_truthy).unwrap_or(false)
    }

    /// The raw metadata mapping.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Consume the frontmatter, yielding the raw mapping.
    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        match self.mapping.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Truthiness of a YAML value, matching loose boolean-like metadata:
/// null, `false`, `0`, and the empty string are falsy; everything else
/// (including the *string* `"false"`) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

/// Parse frontmatter from markdown content
///
/// Returns a tuple of (frontmatter, body). If no delimited metadata
/// block is present, returns an empty mapping with the full content as
/// body. A malformed block is an error; the caller aborts the run.
///
/// # Example
///
/// ```
/// use mdcorpus_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: My Post\ndraft: false\n---\n# Hello\n";
///
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title(), Some("My Post"));
/// assert!(!fm.is_draft());
/// assert!(body.trim().starts_with("# Hello"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let re = frontmatter_regex();

    if let Some(captures) = re.captures(content) {
        let yaml = captures.get(1).unwrap().as_str();
        let body = captures.get(2).unwrap().as_str();

        // An empty block parses as null; treat it as an empty mapping.
        let mapping = serde_yaml::from_str::<Option<Mapping>>(yaml)?.unwrap_or_default();

        Ok((
            Frontmatter {
                mapping: stringify_keys(mapping),
            },
            body.to_string(),
        ))
    } else {
        // No frontmatter, return an empty mapping with the full content as body
        Ok((Frontmatter::default(), content.to_string()))
    }
}

/// Recursively stringify mapping keys. YAML allows non-string keys
/// (`1: x`, `true: y`), the JSON artifacts do not; keys take the same
/// string form a JS object key would.
fn stringify_keys(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .map(|(key, value)| (Value::String(key_string(&key)), stringify_values(value)))
        .collect()
}

fn stringify_values(value: Value) -> Value {
    match value {
        Value::Mapping(m) => Value::Mapping(stringify_keys(m)),
        Value::Sequence(s) => Value::Sequence(s.into_iter().map(stringify_values).collect()),
        other => other,
    }
}

fn key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
