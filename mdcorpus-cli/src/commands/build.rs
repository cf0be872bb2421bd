//! Build command implementation.

use anyhow::{Context, Result};
use mdcorpus_core::{Config, CorpusIndexer};
use std::fs;
use std::path::Path;

/// Full index artifact.
const POSTS_FILE: &str = "posts.json";

/// Search artifact. Currently byte-identical to the full index, but a
/// logically separate consumer that may diverge (stripped content,
/// derived fields) without touching the indexer.
const SEARCH_FILE: &str = "search.json";

/// Index the content tree and write both JSON artifacts.
pub fn build_corpus(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Indexing {:?}", config.root_dir());

    let indexer = CorpusIndexer::new(config.clone());
    let records = indexer.index().context("Failed to index content tree")?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    // Serialize once so a failure leaves neither artifact half-written
    // out of step with the other
    let payload = serde_json::to_vec(&records).context("Failed to serialize records")?;

    let posts_path = output_dir.join(POSTS_FILE);
    fs::write(&posts_path, &payload)
        .with_context(|| format!("Failed to write {:?}", posts_path))?;

    let search_path = output_dir.join(SEARCH_FILE);
    fs::write(&search_path, &payload)
        .with_context(|| format!("Failed to write {:?}", search_path))?;

    tracing::info!("✓ Wrote {} records", records.len());
    tracing::info!("✓ Output written to {:?}", output_dir);

    Ok(())
}

/// Load the config file, falling back to the conventional defaults when
/// it does not exist so the build step runs with no arguments.
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        tracing::info!("Loading config from {:?}", config_path);
        Config::from_file(config_path).context("Failed to load configuration")
    } else {
        tracing::debug!("No config file at {:?}, using defaults", config_path);
        Ok(Config::default())
    }
}
