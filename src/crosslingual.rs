//! Cross-lingual consistency validation.
//!
//! The symbol alphabets are shared across languages, so parallel
//! sentences must agree on their ROOT. This module carries a curated
//! parallel-sentence table and a validator that checks ROOT equality
//! between an English sentence and its translation.

use serde::{Deserialize, Serialize};

use crate::encoder::PtilEncoder;
use crate::lexicon::Language;
use crate::root::Root;

/// One curated parallel pair: an English sentence and its translation.
#[derive(Debug, Clone, Copy)]
pub struct ParallelPair {
    /// Translation language.
    pub language: Language,
    /// English sentence.
    pub english: &'static str,
    /// Translated sentence.
    pub translated: &'static str,
    /// ROOT both encodings must produce.
    pub expected_root: Root,
}

/// The curated parallel-sentence table.
pub static PARALLEL_TABLE: &[ParallelPair] = &[
    ParallelPair {
        language: Language::Es,
        english: "The boy runs.",
        translated: "El niño corre.",
        expected_root: Root::Motion,
    },
    ParallelPair {
        language: Language::Es,
        english: "She gave him a book.",
        translated: "Ella dio un libro.",
        expected_root: Root::Transfer,
    },
    ParallelPair {
        language: Language::Es,
        english: "The man sleeps.",
        translated: "El hombre duerme.",
        expected_root: Root::Existence,
    },
    ParallelPair {
        language: Language::Fr,
        english: "The boy runs.",
        translated: "Le garçon court.",
        expected_root: Root::Motion,
    },
    ParallelPair {
        language: Language::Fr,
        english: "She sees the house.",
        translated: "Elle voit la maison.",
        expected_root: Root::Perception,
    },
    ParallelPair {
        language: Language::De,
        english: "The boy runs.",
        translated: "Der Junge läuft.",
        expected_root: Root::Motion,
    },
    ParallelPair {
        language: Language::De,
        english: "The woman writes.",
        translated: "Die Frau schreibt.",
        expected_root: Root::Creation,
    },
    ParallelPair {
        language: Language::It,
        english: "The boy runs.",
        translated: "Il ragazzo corre.",
        expected_root: Root::Motion,
    },
    ParallelPair {
        language: Language::It,
        english: "The man sleeps.",
        translated: "L'uomo dorme.",
        expected_root: Root::Existence,
    },
];

/// Outcome of validating one pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResult {
    /// The ROOT of the English encoding, if any CSC was produced.
    pub english_root: Option<Root>,
    /// The ROOT of the translated encoding, if any CSC was produced.
    pub translated_root: Option<Root>,
    /// Both sides produced the same, expected ROOT.
    pub consistent: bool,
}

/// Validates ROOT agreement for one pair.
#[must_use]
pub fn validate_pair(pair: &ParallelPair) -> PairResult {
    let english = PtilEncoder::for_language(Language::En);
    let other = PtilEncoder::for_language(pair.language);

    let english_root = english.encode(pair.english).first().map(|c| c.root);
    let translated_root = other.encode(pair.translated).first().map(|c| c.root);

    let consistent = english_root == Some(pair.expected_root)
        && translated_root == Some(pair.expected_root);

    PairResult { english_root, translated_root, consistent }
}

/// Validates the whole curated table; returns the failing pairs'
/// indices.
#[must_use]
pub fn validate_table() -> Vec<usize> {
    PARALLEL_TABLE
        .iter()
        .enumerate()
        .filter(|(_, pair)| !validate_pair(pair).consistent)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_motion_pair_agrees() {
        let result = validate_pair(&PARALLEL_TABLE[0]);
        assert_eq!(result.english_root, Some(Root::Motion));
        assert_eq!(result.translated_root, Some(Root::Motion));
        assert!(result.consistent);
    }

    #[test]
    fn whole_table_is_consistent() {
        let failures = validate_table();
        assert!(failures.is_empty(), "inconsistent pairs: {failures:?}");
    }
}
