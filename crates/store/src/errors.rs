//! Errors raised while reading query results or writing the table.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the query results or persist the annotation table.
///
/// None of these are retried; the caller reports them and exits.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input file is missing or could not be read.
    #[error("failed to read query results from '{}'", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not a JSON array of preposition records.
    #[error("invalid JSON in query results '{}'", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be created or flushed.
    ///
    /// Produced when the destination directory does not exist.
    #[error("failed to write preposition table to '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be encoded as JSON.
    #[error("failed to serialize preposition table for '{}'", .path.display())]
    SerializeOutput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// The file the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadInput { path, .. }
            | Self::ParseInput { path, .. }
            | Self::WriteOutput { path, .. }
            | Self::SerializeOutput { path, .. } => path,
        }
    }
}
