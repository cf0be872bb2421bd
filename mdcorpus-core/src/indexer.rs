//! Corpus indexing - traversal, grouping, slug derivation, filtering.

use crate::config::Config;
use crate::frontmatter::{is_truthy, parse_frontmatter, Frontmatter, FrontmatterError};
use crate::models::Record;
use crate::slug::{slugify, Slugger};
use crate::transliterate::transliterate;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File names starting with this prefix are excluded from traversal
/// entirely, descendants included.
pub const RESERVED_PREFIX: char = '-';

/// Extensions that mark a file as an indexed document.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Frontmatter error in {path:?}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

/// Whether a directory entry name is reserved (private/index files that
/// never produce records).
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Whether a path is a leaf document by extension.
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Whether a record survives the draft filter.
pub fn is_published(record: &Record) -> bool {
    !record
        .frontmatter
        .get("draft")
        .map(is_truthy)
        .unwrap_or(false)
}

/// Walks a content tree and produces the slugged, grouped record set.
///
/// Traversal is a synchronous depth-first walk; entries come out in the
/// order the filesystem enumerator yields them, with no sorting imposed.
/// Any filesystem or frontmatter failure aborts the whole run.
pub struct CorpusIndexer {
    config: Config,
}

impl CorpusIndexer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Index the configured root, returning one record per published
    /// document in traversal order.
    pub fn index(&self) -> Result<Vec<Record>, IndexError> {
        let root = self.config.root_dir();
        let prefix = self.config.root_segments();

        // Fresh de-duplication scope per run, so re-indexing an
        // unchanged tree yields identical slugs
        let mut slugger = Slugger::new();

        let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .file_name()
                    .to_str()
                    .map(|name| !is_reserved(name))
                    .unwrap_or(true)
        });

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_document(entry.path()) {
                continue;
            }
            candidates.push(self.index_document(entry.path(), &root, &prefix, &mut slugger)?);
        }

        tracing::info!("Found {} documents", candidates.len());

        // Draft filtering is a separate stage from traversal
        let records: Vec<Record> = candidates.into_iter().filter(is_published).collect();

        tracing::info!("Indexed {} published records", records.len());

        Ok(records)
    }

    fn index_document(
        &self,
        path: &Path,
        root: &Path,
        prefix: &[String],
        slugger: &mut Slugger,
    ) -> Result<Record, IndexError> {
        tracing::debug!("Indexing {:?}", path);

        let raw = fs::read_to_string(path)?;
        let (frontmatter, content) =
            parse_frontmatter(&raw).map_err(|source| IndexError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?;

        // Full segment list as spelled from the configured root
        let mut segments = prefix.to_vec();
        if let Ok(rel) = path.strip_prefix(root) {
            segments.extend(rel.components().filter_map(|c| match c {
                Component::Normal(s) => s.to_str().map(|s| s.to_string()),
                _ => None,
            }));
        }

        let slug = self.derive_slug(&frontmatter, &segments, slugger);
        let group = segments
            .get(self.config.group_depth)
            .cloned()
            .unwrap_or_default();

        Ok(Record {
            group,
            slug,
            frontmatter: frontmatter.into_mapping(),
            content,
        })
    }

    /// Derive a document's slug, in priority order: explicit frontmatter
    /// slug (verbatim), transliterated title (normalized, de-duplicated
    /// per folder), raw path segments (unnormalized fallback).
    fn derive_slug(
        &self,
        frontmatter: &Frontmatter,
        segments: &[String],
        slugger: &mut Slugger,
    ) -> String {
        if let Some(slug) = frontmatter.slug() {
            return slug.to_string();
        }

        // Keep at least the filename segment so the slug is never empty
        let offset = self
            .config
            .content_depth
            .min(segments.len().saturating_sub(1));
        let parts = &segments[offset..];
        let folder = parts[..parts.len().saturating_sub(1)].join("/");

        if let Some(title) = frontmatter.title() {
            let token = slugify(&transliterate(title));
            // A title with no sluggable characters would leave an empty
            // token and a trailing-slash slug; fall through to the raw
            // path fallback instead
            if !token.is_empty() {
                let candidate = if folder.is_empty() {
                    token
                } else {
                    format!("{folder}/{token}")
                };
                return slugger.dedupe(&candidate);
            }
        }

        // No slug, no title: raw path segments with the extension
        // dropped, possibly non-URL-safe. Accepted fallback, not an error.
        let mut raw = parts.to_vec();
        if let Some(last) = raw.last_mut() {
            *last = strip_extension(last).to_string();
        }
        raw.join("/")
    }
}

/// Drop the final dot-suffix of a file name, keeping dotfile names intact.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
