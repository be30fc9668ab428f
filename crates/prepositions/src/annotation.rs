//! Building the preposition annotation table from query records.
//!
//! Aggregation folds the records into [`RawAnnotations`] in input order.
//! Normalization then sorts the `/`-separated segments of each annotation so
//! that a preposition governing several cases always reads e.g. `Acc/Dat`.

use tracing::debug;

use crate::case::abbreviate_case;
use crate::record::{PrepositionRecord, CASELESS_ALIAS};
use crate::types::{PrepositionTable, RawAnnotations};

/// Annotations that are left untouched by [`normalize_annotation`].
const SINGLE_ANNOTATIONS: [&str; 3] = ["Akk", "Dat", "Gen"];

/// Folds query records into per-preposition annotations.
///
/// - A record with a case contributes its abbreviation, appended after a `/`
///   when the preposition is already known. Repeats and empty abbreviations are
///   kept as they come.
/// - A record without a case records an empty annotation, unless the
///   preposition is already known or is the bare `"a"`.
/// - Records without a preposition are skipped.
///
/// Accumulation depends on record order: a case-less record arriving after a
/// case-bearing one for the same preposition has no effect, while a case-bearing
/// record arriving after a case-less one appends to the empty annotation.
pub fn aggregate(records: &[PrepositionRecord]) -> RawAnnotations {
    let mut raw = RawAnnotations::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(preposition) = record.preposition.as_deref() else {
            skipped += 1;
            continue;
        };

        match record.case.as_deref() {
            Some(case) => raw.push_case(preposition, abbreviate_case(case)),
            None if preposition != CASELESS_ALIAS => raw.insert_caseless(preposition),
            None => debug!(preposition, "dropping case-less alias"),
        }
    }

    debug!(
        records = records.len(),
        skipped,
        prepositions = raw.len(),
        "aggregated preposition records"
    );
    raw
}

/// Puts the segments of a raw annotation in alphabetical order.
///
/// `"Dat/Acc"` becomes `"Acc/Dat"`. Empty segments sort first and are kept.
pub fn normalize_annotation(annotation: &str) -> String {
    if SINGLE_ANNOTATIONS.contains(&annotation) {
        return annotation.to_owned();
    }

    let mut segments: Vec<&str> = annotation.split('/').collect();
    segments.sort_unstable();
    segments.join("/")
}

/// Normalizes every annotation, producing the final table.
pub fn normalize(raw: RawAnnotations) -> PrepositionTable {
    raw.into_inner()
        .into_iter()
        .map(|(preposition, annotation)| {
            let normalized = normalize_annotation(&annotation);
            (preposition, normalized)
        })
        .collect()
}

/// Aggregates and normalizes `records` in one step.
pub fn format_records(records: &[PrepositionRecord]) -> PrepositionTable {
    normalize(aggregate(records))
}
