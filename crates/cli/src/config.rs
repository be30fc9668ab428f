//! Command-line configuration.
//!
//! Input and output locations are always supplied by the caller. When run by
//! hand from the `German/prepositions` data directory the defaults are correct;
//! an orchestrating update script passes explicit paths (or sets the matching
//! environment variables) instead.

use std::path::PathBuf;

use clap::Parser;

/// Default query results file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "prepositionsQueried.json";

/// Default table destination, relative to the `German/prepositions` data directory.
pub const DEFAULT_OUTPUT: &str =
    "../../../Keyboards/LanguageKeyboards/German/Data/prepositions.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "format-prepositions", version)]
#[command(about = "Formats Wikidata preposition query results into the keyboard's annotation table")]
pub struct Config {
    /// Path to the JSON array returned by the preposition query
    #[arg(short, long, env = "PREPOSITIONS_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the prepositions.json table to write
    #[arg(short, long, env = "PREPOSITIONS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log filter directive (e.g. "info", "store=debug"); logs go to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
impl Config {
    /// Builds a configuration with explicit paths and default logging.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            log_level: "warn".to_string(),
        }
    }
}
