//! # mdcorpus-core
//!
//! Core library for the mdcorpus content indexer.
//!
//! This crate walks a tree of markdown documents, parses their YAML
//! frontmatter, derives a unique URL-safe slug and a group label per
//! document, and produces the ordered record set that the CLI exports
//! as JSON artifacts.

pub mod config;
pub mod frontmatter;
pub mod indexer;
pub mod models;
pub mod slug;
pub mod transliterate;

pub use config::Config;
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use indexer::{CorpusIndexer, IndexError};
pub use models::Record;
pub use slug::{slugify, Slugger};
pub use transliterate::transliterate;
