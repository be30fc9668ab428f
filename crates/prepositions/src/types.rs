//! Value types produced by the annotation stages.
//!
//! [`RawAnnotations`] is the aggregator's working state; [`PrepositionTable`] is
//! the normalized result written for the keyboard. Both are keyed by preposition
//! and iterate in ascending code point order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Aggregation state
// ---------------------------------------------------------------------------

/// Preposition → annotation as accumulated from the query results.
///
/// Values may hold several `/`-separated segments in arrival order, including
/// repeated or empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnnotations(BTreeMap<String, String>);

impl RawAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `abbreviation` for `preposition`.
    ///
    /// The first abbreviation becomes the annotation; later ones are appended
    /// after a `/`.
    pub fn push_case(&mut self, preposition: &str, abbreviation: &str) {
        match self.0.get_mut(preposition) {
            Some(annotation) => {
                annotation.push('/');
                annotation.push_str(abbreviation);
            }
            None => {
                self.0
                    .insert(preposition.to_owned(), abbreviation.to_owned());
            }
        }
    }

    /// Records `preposition` with an empty annotation unless it is already present.
    pub fn insert_caseless(&mut self, preposition: &str) {
        if !self.0.contains_key(preposition) {
            self.0.insert(preposition.to_owned(), String::new());
        }
    }

    pub fn get(&self, preposition: &str) -> Option<&str> {
        self.0.get(preposition).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Output table
// ---------------------------------------------------------------------------

/// The finished lookup table consumed by the keyboard.
///
/// Serializes as a flat JSON object whose keys are in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrepositionTable(BTreeMap<String, String>);

impl PrepositionTable {
    pub fn get(&self, preposition: &str) -> Option<&str> {
        self.0.get(preposition).map(String::as_str)
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn entry_count(&self) -> EntryCount {
        EntryCount::new(self.0.len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PrepositionTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------

/// Number of prepositions written to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryCount(usize);

impl EntryCount {
    /// Creates an [`EntryCount`] from a raw integer.
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    /// Returns the underlying integer value.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EntryCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_case_appends_after_first() {
        let mut raw = RawAnnotations::new();
        raw.push_case("in", "Dat");
        raw.push_case("in", "Acc");
        raw.push_case("in", "");

        assert_eq!(raw.get("in"), Some("Dat/Acc/"));
    }

    #[test]
    fn test_insert_caseless_keeps_existing_annotation() {
        let mut raw = RawAnnotations::new();
        raw.push_case("mit", "Dat");
        raw.insert_caseless("mit");
        raw.insert_caseless("ohne");

        assert_eq!(raw.get("mit"), Some("Dat"));
        assert_eq!(raw.get("ohne"), Some(""));
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn test_table_serializes_as_sorted_object() {
        let table: PrepositionTable = [
            ("zu".to_owned(), "Dat".to_owned()),
            ("an".to_owned(), "Acc/Dat".to_owned()),
            ("ab".to_owned(), String::new()),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"ab":"","an":"Acc/Dat","zu":"Dat"}"#);
        assert_eq!(table.entry_count(), EntryCount::new(3));
    }
}
