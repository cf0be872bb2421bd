//! Record model for indexed documents.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// One indexed document.
///
/// Serializes to the artifact element shape
/// `{ group, slug, frontmatter, content }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Coarse bucket label from the document's directory position.
    pub group: String,

    /// Unique, `/`-separated, URL-safe identifier. Never empty.
    pub slug: String,

    /// Full metadata mapping, passed through unmodified.
    pub frontmatter: Mapping,

    /// Document body with the metadata block stripped.
    pub content: String,
}
