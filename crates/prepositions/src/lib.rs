//! Domain logic for turning Wikidata preposition query results into the
//! keyboard's preposition annotation table.
//!
//! ## Architectural Layer
//!
//! **Business logic.** This crate has no I/O dependencies. Reading the query
//! results and writing the table are handled by the `store` crate; the `cli`
//! crate wires the two together.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`case`] | Grammatical cases and their abbreviations |
//! | [`record`] | A single row of the Wikidata query results |
//! | [`annotation`] | Aggregation and normalization of annotations |
//! | [`types`] | Value types (`RawAnnotations`, `PrepositionTable`, `EntryCount`) |

pub mod annotation;
pub mod case;
pub mod record;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use annotation::{aggregate, normalize, normalize_annotation, format_records};
pub use case::{abbreviate_case, GrammaticalCase};
pub use record::PrepositionRecord;
pub use types::{EntryCount, PrepositionTable, RawAnnotations};
