//! Public encoder facade.
//!
//! Orchestrates C1–C7 into the three synchronous operations of the
//! public contract. Construction loads the frozen parser profile once;
//! after that the encoder is immutable, `Send + Sync`, and pure.
//!
//! Failure model: encode-time faults never escape. Every per-sentence
//! problem recovers to the documented fallback and is reported on the
//! diagnostics channel, which never alters the serialized output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{Analysis, DepRel, PosTag};
use crate::csc::Csc;
use crate::error::{AnalysisError, PtilResult, ValidationError};
use crate::lexicon::Language;
use crate::meta::MetaDetector;
use crate::ops::OpsExtractor;
use crate::parser::{RuleParser, ShallowParser};
use crate::role::Role;
use crate::roles::RolesBinder;
use crate::root::Root;
use crate::root_map::{is_known_predicate, DepContext, RootMapper};
use crate::serialize::{serialize_all, Format};

/// A recovery that fired during encoding.
///
/// Diagnostics only: the CSC list is already valid when these are
/// reported, and their presence never changes serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recovery {
    /// A sentence produced no usable analysis.
    EmptyAnalysis,
    /// A sentence carried no identifiable predicate; the fallback CSC
    /// was emitted.
    NoPredicate,
    /// A predicate lemma was absent from every dictionary and resolved
    /// through the POS fallback ladder.
    UnknownPredicate {
        /// The unresolved lemma.
        lemma: String,
    },
    /// A bound role was inadmissible under the ROOT and was dropped.
    IncompatibleRoleDropped {
        /// The dropped role.
        role: Role,
        /// The ROOT that rejected it.
        root: Root,
    },
}

/// Training output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFormat {
    /// `[CSC] <serialized> [TEXT] <original>`.
    #[default]
    Standard,
    /// Serialized CSC only.
    CscOnly,
    /// CSC and original repeated by weight, joined by the separator.
    Mixed,
}

impl FromStr for TrainingFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "csc_only" => Ok(Self::CscOnly),
            "mixed" => Ok(Self::Mixed),
            other => Err(ValidationError::UnknownFormatType { name: other.to_string() }),
        }
    }
}

/// Configuration for [`PtilEncoder::encode_for_training`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Output layout.
    pub format_type: TrainingFormat,
    /// Repetition weight for the CSC part (mixed layout only).
    pub csc_weight: f64,
    /// Repetition weight for the original text (mixed layout only).
    pub original_weight: f64,
    /// Separator between parts.
    pub separator: String,
    /// Emit the `[CSC]` / `[TEXT]` markers.
    pub include_brackets: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            format_type: TrainingFormat::Standard,
            csc_weight: 1.0,
            original_weight: 1.0,
            separator: " ".to_string(),
            include_brackets: true,
        }
    }
}

impl TrainingConfig {
    /// Validates weight fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("csc_weight", self.csc_weight), ("original_weight", self.original_weight)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }
}

/// End-to-end PTIL encoder.
///
/// One instance may be shared across concurrent callers: every table it
/// holds is `'static` and the rule parser keeps no mutable state. Two
/// concurrent calls with the same input produce identical output
/// regardless of interleaving.
#[derive(Debug, Clone, Copy)]
pub struct PtilEncoder {
    language: Language,
    parser: RuleParser,
    mapper: RootMapper,
    ops: OpsExtractor,
    binder: RolesBinder,
    meta: MetaDetector,
}

impl PtilEncoder {
    /// Creates an encoder for a supported language.
    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        let profile = language.profile();
        Self {
            language,
            parser: RuleParser::new(language),
            mapper: RootMapper::new(profile),
            ops: OpsExtractor::new(profile),
            binder: RolesBinder::new(profile),
            meta: MetaDetector::new(profile),
        }
    }

    /// Creates an encoder from an ISO 639-1 code.
    ///
    /// # Errors
    ///
    /// `AnalysisError::UnsupportedLanguage` when no parser model is
    /// registered for the code. This is the only construction-time
    /// failure; it never recurs during encoding.
    pub fn for_code(code: &str) -> PtilResult<Self> {
        let language = Language::from_code(code).ok_or_else(|| AnalysisError::UnsupportedLanguage {
            code: code.to_string(),
            supported: Language::supported_codes(),
        })?;
        Ok(Self::for_language(language))
    }

    /// The encoder's language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Identifier of the frozen parser model in use.
    #[must_use]
    pub fn model_id(&self) -> &str {
        self.parser.model_id()
    }

    /// Encodes text into an ordered CSC list.
    ///
    /// Empty or whitespace-only input yields the empty list. Encoding
    /// never fails: per-sentence faults recover to documented fallbacks.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<Csc> {
        self.encode_with_diagnostics(text).0
    }

    /// Encodes text, also reporting which recoveries fired.
    #[must_use]
    pub fn encode_with_diagnostics(&self, text: &str) -> (Vec<Csc>, Vec<Recovery>) {
        let mut cscs = Vec::new();
        let mut recoveries = Vec::new();

        if text.trim().is_empty() {
            return (cscs, recoveries);
        }

        for sentence in split_sentences(text) {
            let analysis = self.parser.analyze(&sentence);
            if analysis.is_empty() {
                recoveries.push(Recovery::EmptyAnalysis);
                continue;
            }

            let meta = self.meta.detect(&analysis);
            let predicates = identify_predicates(&analysis);

            if predicates.is_empty() {
                debug!(sentence = %sentence, "no predicate; emitting fallback CSC");
                recoveries.push(Recovery::NoPredicate);
                let mut fallback = Csc::fallback();
                fallback.meta = meta;
                cscs.push(fallback);
                continue;
            }

            for pred in predicates {
                cscs.push(self.encode_predicate(&analysis, pred, meta, &mut recoveries));
            }
        }

        if !recoveries.is_empty() {
            warn!(count = recoveries.len(), "encode recovered from degradations");
        }
        (cscs, recoveries)
    }

    fn encode_predicate(
        &self,
        analysis: &Analysis,
        pred: usize,
        meta: Option<crate::meta::Meta>,
        recoveries: &mut Vec<Recovery>,
    ) -> Csc {
        let lemma = analysis.lemmas[pred].as_str();
        let relations: Vec<DepRel> = analysis.children_of(pred).map(|arc| arc.rel).collect();
        let ctx = DepContext { relations: &relations };

        let known = self.parser.profile().predicate_root(lemma).is_some()
            || (self.language == Language::En && is_known_predicate(lemma));
        if !known {
            recoveries.push(Recovery::UnknownPredicate { lemma: lemma.to_string() });
        }

        let root = self.mapper.map(lemma, analysis.pos[pred], &ctx);
        let ops = self.ops.extract(analysis, pred);
        let roles = self.binder.bind(analysis, pred, root);

        let (csc, dropped) = Csc::assemble(root, ops, roles, meta);
        for role in dropped {
            recoveries.push(Recovery::IncompatibleRoleDropped { role, root });
        }
        csc
    }

    /// Encodes and serializes in one step. Empty input yields the empty
    /// string.
    #[must_use]
    pub fn encode_and_serialize(&self, text: &str, format: Format) -> String {
        let cscs = self.encode(text);
        serialize_all(&cscs, format)
    }

    /// Produces a training-layout string per the configuration.
    ///
    /// # Errors
    ///
    /// `ValidationError::InvalidWeight` for negative or non-finite
    /// weights. Everything else recovers internally.
    pub fn encode_for_training(&self, text: &str, config: &TrainingConfig) -> PtilResult<String> {
        config.validate()?;

        let serialized = self.encode_and_serialize(text, Format::Verbose);

        Ok(match config.format_type {
            TrainingFormat::CscOnly => serialized,
            TrainingFormat::Standard => {
                if config.include_brackets {
                    format!("[CSC] {serialized}{}[TEXT] {text}", config.separator)
                } else {
                    format!("{serialized}{}{text}", config.separator)
                }
            }
            TrainingFormat::Mixed => {
                let (csc_part, text_part) = if config.include_brackets {
                    (format!("[CSC] {serialized}"), format!("[TEXT] {text}"))
                } else {
                    (serialized, text.to_string())
                };
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let csc_repeats = (config.csc_weight.trunc() as usize).max(1);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let text_repeats = (config.original_weight.trunc() as usize).max(1);

                let mut parts = Vec::with_capacity(csc_repeats + text_repeats);
                parts.extend((0..csc_repeats).map(|_| csc_part.clone()));
                parts.extend((0..text_repeats).map(|_| text_part.clone()));
                parts.join(&config.separator)
            }
        })
    }
}

/// Splits text into sentences on terminal punctuation. The terminator
/// stays with its sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

/// Predicates of a sentence: main verbs in textual order, else the first
/// auxiliary (copular clauses), else nothing.
fn identify_predicates(analysis: &Analysis) -> Vec<usize> {
    let verbs: Vec<usize> = (0..analysis.tokens.len())
        .filter(|&i| analysis.pos[i] == PosTag::Verb)
        .collect();
    if !verbs.is_empty() {
        return verbs;
    }
    (0..analysis.tokens.len())
        .find(|&i| analysis.pos[i] == PosTag::Aux)
        .into_iter()
        .collect()
}
