//! File-system adapter for the preposition formatter.
//!
//! Reads the JSON array produced by the Wikidata preposition query and writes
//! the finished [`prepositions::PrepositionTable`] as a pretty-printed JSON
//! object.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All file access and JSON encoding live here. The
//! [`prepositions`] crate sees only records and tables.
//!
//! Output is written with two-space indentation, keys in ascending order, and
//! non-ASCII characters emitted literally. The destination directory must
//! already exist; it is never created.

pub mod errors;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use prepositions::{PrepositionRecord, PrepositionTable};
use tracing::{debug, info};

pub use errors::StoreError;

/// Reads the query results at `path`.
///
/// Fails if the file cannot be opened or is not a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<PrepositionRecord>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<PrepositionRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StoreError::ParseInput {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), records = records.len(), "loaded query results");
    Ok(records)
}

/// Writes `table` to `path`, replacing any existing file.
pub fn write_table(path: &Path, table: &PrepositionTable) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|source| StoreError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table).map_err(|source| {
        StoreError::SerializeOutput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| StoreError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        prepositions = %table.entry_count(),
        "wrote preposition table"
    );
    Ok(())
}
