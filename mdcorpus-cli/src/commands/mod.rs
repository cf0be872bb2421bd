//! CLI command implementations.

pub mod build;
pub mod list;

pub use build::build_corpus;
pub use list::list_records;
