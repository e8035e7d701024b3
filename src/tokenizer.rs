//! Tokenizer compatibility checking.
//!
//! Serialized CSC output must survive the tokenizers of downstream LLM
//! stacks. Three deterministic stubs model the dominant families (BPE,
//! Unigram, WordPiece); the check verifies that tokenization succeeds
//! and that the serialized form does not cost more tokens than the raw
//! input it replaces.

use serde::{Deserialize, Serialize};

/// Tokenizer family stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Byte-pair-encoding-like: fixed-width subword chunks.
    Bpe,
    /// Unigram-like: greedy longest-piece matching.
    Unigram,
    /// WordPiece-like: first piece plus `##` continuations.
    WordPiece,
}

impl TokenizerKind {
    /// Every stub family.
    pub const ALL: [Self; 3] = [Self::Bpe, Self::Unigram, Self::WordPiece];
}

/// Result of validating one string against one tokenizer stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// The tokenizer family checked.
    pub kind: TokenizerKind,
    /// Tokens produced for the serialized string.
    pub token_count: usize,
    /// Tokens the raw input would have cost.
    pub raw_token_count: usize,
    /// Problems found (control characters, malformed tags).
    pub issues: Vec<String>,
    /// Tokenization succeeded with no issues.
    pub tokenizes: bool,
    /// Serialized form costs no more than the raw input.
    pub within_budget: bool,
}

impl CompatibilityReport {
    /// Tokenizes cleanly and stays within the raw-input token budget.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.tokenizes && self.within_budget
    }
}

fn structural_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if text.chars().any(char::is_control) {
        issues.push("control characters present".to_string());
    }
    if text.contains("<>") || text.contains("<=>") {
        issues.push("empty tag".to_string());
    }
    let opens = text.chars().filter(|&c| c == '<').count();
    let closes = text.chars().filter(|&c| c == '>').count();
    if opens != closes {
        issues.push("unbalanced angle brackets".to_string());
    }
    issues
}

fn chunk_word(word: &str, width: usize) -> usize {
    let chars = word.chars().count();
    chars.div_ceil(width)
}

/// Token count under a stub family. Deterministic, whitespace-driven.
#[must_use]
pub fn token_count(kind: TokenizerKind, text: &str) -> usize {
    text.split_whitespace()
        .map(|word| match kind {
            TokenizerKind::Bpe => chunk_word(word, 4),
            TokenizerKind::Unigram => chunk_word(word, 5),
            // WordPiece: one head piece, then shorter continuations.
            TokenizerKind::WordPiece => {
                let chars = word.chars().count();
                if chars <= 6 {
                    1
                } else {
                    1 + (chars - 6).div_ceil(4)
                }
            }
        })
        .sum()
}

/// Validates a serialized string against one tokenizer family.
#[must_use]
pub fn validate(kind: TokenizerKind, serialized: &str, raw_input: &str) -> CompatibilityReport {
    let issues = structural_issues(serialized);
    let tokens = token_count(kind, serialized);
    let raw_tokens = token_count(kind, raw_input);
    CompatibilityReport {
        kind,
        token_count: tokens,
        raw_token_count: raw_tokens,
        tokenizes: issues.is_empty(),
        within_budget: tokens <= raw_tokens,
        issues,
    }
}

/// Validates against every stub family.
#[must_use]
pub fn validate_all(serialized: &str, raw_input: &str) -> Vec<CompatibilityReport> {
    TokenizerKind::ALL
        .iter()
        .map(|&kind| validate(kind, serialized, raw_input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_deterministic() {
        let a = token_count(TokenizerKind::Bpe, "R:MOTION A:BOY");
        let b = token_count(TokenizerKind::Bpe, "R:MOTION A:BOY");
        assert_eq!(a, b);
    }

    #[test]
    fn control_characters_fail() {
        let report = validate(TokenizerKind::Bpe, "a\u{0007}b", "a b c");
        assert!(!report.tokenizes);
        assert!(!report.is_compatible());
    }

    #[test]
    fn ultra_output_fits_the_budget() {
        let raw = "The boy will not go to school tomorrow.";
        let serialized = "1|FN|ab|gs|mT";
        for report in validate_all(serialized, raw) {
            assert!(report.tokenizes, "{:?}", report.issues);
            assert!(report.within_budget, "{:?} over budget", report.kind);
        }
    }

    #[test]
    fn unbalanced_tags_are_flagged() {
        let report = validate(TokenizerKind::WordPiece, "<ROOT=MOTION", "x");
        assert!(!report.tokenizes);
    }
}
