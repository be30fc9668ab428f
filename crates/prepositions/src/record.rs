//! A single row of the Wikidata preposition query.

use serde::{Deserialize, Serialize};

/// Literal that Wikidata returns for the French `à` when no case is attached.
///
/// The correct `à` entry is present elsewhere in the results, so case-less `a`
/// rows are dropped instead of producing an empty annotation.
pub const CASELESS_ALIAS: &str = "a";

/// One result binding from `prepositionsQueried.json`.
///
/// Both fields are optional in the query output. Any other fields present on the
/// object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepositionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preposition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
}

impl PrepositionRecord {
    /// Creates a record carrying a case.
    pub fn with_case(preposition: impl Into<String>, case: impl Into<String>) -> Self {
        Self {
            preposition: Some(preposition.into()),
            case: Some(case.into()),
        }
    }

    /// Creates a record without a case.
    pub fn caseless(preposition: impl Into<String>) -> Self {
        Self {
            preposition: Some(preposition.into()),
            case: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: PrepositionRecord = serde_json::from_value(json!({
            "lexeme": "http://www.wikidata.org/entity/L1234",
            "preposition": "über",
            "case": "accusative case"
        }))
        .unwrap();

        assert_eq!(record, PrepositionRecord::with_case("über", "accusative case"));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let record: PrepositionRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, PrepositionRecord::default());

        let record: PrepositionRecord =
            serde_json::from_value(json!({ "preposition": "für" })).unwrap();
        assert_eq!(record, PrepositionRecord::caseless("für"));
    }
}
