//! List records as JSON on stdout, for tooling and agents.

use anyhow::{Context, Result};
use mdcorpus_core::CorpusIndexer;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;

pub fn list_records(config_path: &Path, pretty: bool) -> Result<()> {
    let config = super::build::load_config(config_path)?;

    let indexer = CorpusIndexer::new(config);
    let records = indexer.index().context("Failed to index content tree")?;

    let mut writer = BufWriter::new(stdout());
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &records)?;
    } else {
        serde_json::to_writer(&mut writer, &records)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
