//! Grammatical cases governed by prepositions.
//!
//! Wikidata reports the case either as an English label (`"dative case"`) or as
//! the entity id of the case item (`"Q145599"`). Both forms collapse to the same
//! [`GrammaticalCase`], which in turn knows the short marker shown to users.

use serde::{Deserialize, Serialize};

/// Suffix carried by the English case labels returned from Wikidata.
const CASE_SUFFIX: &str = " case";

/// A grammatical case that a preposition can govern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrammaticalCase {
    Accusative,
    Dative,
    Genitive,
}

impl GrammaticalCase {
    /// All cases, in abbreviation order.
    pub const ALL: [GrammaticalCase; 3] = [Self::Accusative, Self::Dative, Self::Genitive];

    /// Resolves a case as reported by Wikidata.
    ///
    /// Everything from the first `" case"` onward is discarded before matching,
    /// so `"accusative case"` and `"accusative"` are equivalent. Returns `None`
    /// for anything that is not a known label or entity id.
    pub fn from_wikidata(value: &str) -> Option<Self> {
        let label = value
            .split_once(CASE_SUFFIX)
            .map_or(value, |(head, _)| head);

        Self::ALL
            .into_iter()
            .find(|case| label == case.label() || label == case.wikidata_id())
    }

    /// The marker shown in the keyboard preview bar.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Accusative => "Acc",
            Self::Dative => "Dat",
            Self::Genitive => "Gen",
        }
    }

    /// The English label used by Wikidata, without the `" case"` suffix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Accusative => "accusative",
            Self::Dative => "dative",
            Self::Genitive => "genitive",
        }
    }

    /// The Wikidata entity id of the case item.
    pub fn wikidata_id(self) -> &'static str {
        match self {
            Self::Accusative => "Q146078",
            Self::Dative => "Q145599",
            Self::Genitive => "Q146233",
        }
    }
}

impl std::fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Converts a Wikidata case value to its abbreviation.
///
/// Total: unknown values map to the empty string rather than failing.
pub fn abbreviate_case(value: &str) -> &'static str {
    GrammaticalCase::from_wikidata(value).map_or("", GrammaticalCase::abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_ids_abbreviate_to_same_marker() {
        assert_eq!(abbreviate_case("accusative case"), "Acc");
        assert_eq!(abbreviate_case("Q146078"), "Acc");
        assert_eq!(abbreviate_case("dative case"), "Dat");
        assert_eq!(abbreviate_case("Q145599"), "Dat");
        assert_eq!(abbreviate_case("genitive case"), "Gen");
        assert_eq!(abbreviate_case("Q146233"), "Gen");
    }

    #[test]
    fn test_bare_label_without_suffix() {
        assert_eq!(abbreviate_case("dative"), "Dat");
    }

    #[test]
    fn test_unknown_values_abbreviate_to_empty() {
        for value in ["", "nominative case", "Q131105", "Dative case", "case", " case"] {
            assert_eq!(abbreviate_case(value), "", "value: {value:?}");
        }
    }

    #[test]
    fn test_text_after_suffix_is_discarded() {
        assert_eq!(abbreviate_case("genitive case (archaic)"), "Gen");
    }

    #[test]
    fn test_from_wikidata_round_trips_every_case() {
        for case in GrammaticalCase::ALL {
            assert_eq!(GrammaticalCase::from_wikidata(case.wikidata_id()), Some(case));
            assert_eq!(
                GrammaticalCase::from_wikidata(&format!("{} case", case.label())),
                Some(case)
            );
            assert_eq!(case.to_string(), case.abbreviation());
        }
    }
}
