//! Token-reduction measurement.
//!
//! The whole point of the symbolic formats is to spend fewer tokens than
//! the raw prompt. This module measures that claim against the tokenizer
//! stubs and aggregates batch statistics.

use serde::{Deserialize, Serialize};

use crate::encoder::PtilEncoder;
use crate::serialize::Format;
use crate::tokenizer::{token_count, TokenizerKind};

/// Reduction metrics for one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    /// The measured raw text.
    pub raw_text: String,
    /// Serialized CSC form.
    pub csc_serialized: String,
    /// Token cost of the raw text.
    pub raw_token_count: usize,
    /// Token cost of the serialized form.
    pub csc_token_count: usize,
    /// Percentage reduction (negative when the CSC form costs more).
    pub reduction_percentage: f64,
    /// raw/csc token ratio (1.0 when the CSC form is empty).
    pub reduction_ratio: f64,
}

/// Batch summary across many texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEfficiency {
    /// Number of measured texts.
    pub count: usize,
    /// Mean reduction percentage.
    pub mean_reduction_percentage: f64,
    /// Texts meeting the given target percentage.
    pub meeting_target: usize,
}

/// Measures token reduction through an encoder.
#[derive(Debug, Clone, Copy)]
pub struct EfficiencyAnalyzer {
    encoder: PtilEncoder,
    tokenizer: TokenizerKind,
    format: Format,
}

impl EfficiencyAnalyzer {
    /// Creates an analyzer measuring `format` under `tokenizer`.
    #[must_use]
    pub const fn new(encoder: PtilEncoder, tokenizer: TokenizerKind, format: Format) -> Self {
        Self { encoder, tokenizer, format }
    }

    /// Measures one text.
    #[must_use]
    pub fn analyze(&self, text: &str) -> EfficiencyMetrics {
        let serialized = self.encoder.encode_and_serialize(text, self.format);
        let raw_tokens = token_count(self.tokenizer, text);
        let csc_tokens = token_count(self.tokenizer, &serialized);

        let (reduction_percentage, reduction_ratio) = if serialized.is_empty() || raw_tokens == 0 {
            (0.0, 1.0)
        } else {
            #[allow(clippy::cast_precision_loss)]
            let pct = (1.0 - csc_tokens as f64 / raw_tokens as f64) * 100.0;
            #[allow(clippy::cast_precision_loss)]
            let ratio = raw_tokens as f64 / csc_tokens.max(1) as f64;
            (pct, ratio)
        };

        EfficiencyMetrics {
            raw_text: text.to_string(),
            csc_serialized: serialized,
            raw_token_count: raw_tokens,
            csc_token_count: csc_tokens,
            reduction_percentage,
            reduction_ratio,
        }
    }

    /// Measures a batch and summarizes against a target reduction.
    #[must_use]
    pub fn analyze_batch(&self, texts: &[&str], target_percentage: f64) -> BatchEfficiency {
        let metrics: Vec<EfficiencyMetrics> = texts.iter().map(|t| self.analyze(t)).collect();
        let count = metrics.len();
        let mean = if count == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let total: f64 = metrics.iter().map(|m| m.reduction_percentage).sum();
            total / count as f64
        };
        let meeting = metrics
            .iter()
            .filter(|m| m.reduction_percentage >= target_percentage)
            .count();
        BatchEfficiency {
            count,
            mean_reduction_percentage: mean,
            meeting_target: meeting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;

    fn analyzer() -> EfficiencyAnalyzer {
        EfficiencyAnalyzer::new(
            PtilEncoder::for_language(Language::En),
            TokenizerKind::Bpe,
            Format::Ultra,
        )
    }

    #[test]
    fn ultra_format_reduces_tokens() {
        let m = analyzer().analyze("The boy will not go to school tomorrow.");
        assert!(m.csc_token_count < m.raw_token_count, "{m:?}");
        assert!(m.reduction_percentage > 0.0);
        assert!(m.reduction_ratio > 1.0);
    }

    #[test]
    fn empty_text_is_neutral() {
        let m = analyzer().analyze("");
        assert_eq!(m.reduction_percentage, 0.0);
        assert_eq!(m.reduction_ratio, 1.0);
    }

    #[test]
    fn batch_summary_counts_targets() {
        let batch = analyzer().analyze_batch(
            &[
                "The boy will not go to school tomorrow.",
                "She gave him a book.",
            ],
            10.0,
        );
        assert_eq!(batch.count, 2);
        assert!(batch.mean_reduction_percentage > 0.0);
        assert!(batch.meeting_target >= 1);
    }
}
