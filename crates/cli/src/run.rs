//! The load → format → write pipeline.

use anyhow::{Context, Result};
use prepositions::{format_records, EntryCount};
use tracing::info;

use crate::config::Config;

/// Regenerates the preposition table described by `config`.
///
/// The output file is rewritten in full on every run. Returns the number of
/// prepositions written.
pub fn run(config: &Config) -> Result<EntryCount> {
    let records = store::load_records(&config.input).context("loading preposition records")?;

    let table = format_records(&records);
    let count = table.entry_count();
    info!(records = records.len(), prepositions = %count, "formatted prepositions");

    store::write_table(&config.output, &table).context("writing preposition table")?;
    Ok(count)
}

/// The single line printed on stdout after a successful run.
pub fn summary(count: EntryCount) -> String {
    format!("Wrote file prepositions.json with {count} prepositions.")
}
