//! Shallow linguistic analysis structures.
//!
//! The analysis is an acyclic value: dependency arcs reference token
//! indices, never token objects, and nothing downstream holds references
//! back into parser state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags (UD-style closed tag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosTag {
    /// Common noun.
    Noun,
    /// Proper noun.
    Propn,
    /// Pronoun.
    Pron,
    /// Main verb.
    Verb,
    /// Auxiliary or modal verb.
    Aux,
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Adposition (preposition).
    Adp,
    /// Determiner or article.
    Det,
    /// Coordinating conjunction.
    Cconj,
    /// Subordinating conjunction.
    Sconj,
    /// Particle (e.g. negation "not", infinitival "to").
    Part,
    /// Numeral.
    Num,
    /// Interjection.
    Intj,
    /// Punctuation.
    Punct,
    /// Anything unclassifiable.
    X,
}

impl PosTag {
    /// True for tags that can head a nominal argument.
    #[must_use]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::Propn | Self::Pron | Self::Num)
    }
}

/// Dependency relation labels (closed set used by the rule parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepRel {
    /// Nominal subject of an active clause.
    Nsubj,
    /// Nominal subject of a passive clause.
    NsubjPass,
    /// Direct object.
    Dobj,
    /// Indirect object.
    Iobj,
    /// Object of an adposition.
    Pobj,
    /// Adposition attached to a predicate.
    Prep,
    /// Passive agent marker ("by" in a passive clause).
    Agent,
    /// Auxiliary verb.
    Aux,
    /// Negation particle.
    Neg,
    /// Determiner.
    Det,
    /// Adjectival modifier.
    Amod,
    /// Adverbial modifier.
    Advmod,
    /// Bare temporal modifier ("tomorrow").
    Tmod,
    /// Conjunction token.
    Cc,
    /// Coordinated predicate.
    Conj,
    /// Punctuation.
    Punct,
    /// Unclassified attachment.
    Dep,
}

/// One dependency arc: `(head, relation, dependent)` over token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepArc {
    /// Index of the governing token.
    pub head: usize,
    /// Relation label.
    pub rel: DepRel,
    /// Index of the dependent token.
    pub dependent: usize,
}

/// Temporal marker classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tense {
    /// Before utterance time.
    Past,
    /// At utterance time.
    Present,
    /// After utterance time.
    Future,
}

/// Aspect marker classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aspect {
    /// Progressive / ongoing.
    Continuous,
    /// Perfect / finished.
    Completed,
    /// Recurring / customary.
    Habitual,
}

/// Output of the shallow linguistic analyzer (C1).
///
/// Empty input produces the empty analysis; unparsable text degrades to
/// best-effort tokens with an empty dependency set. Neither is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Ordered surface tokens.
    pub tokens: Vec<String>,
    /// Lowercased lemma per token (identity where no rule applies).
    pub lemmas: Vec<String>,
    /// POS tag per token, aligned with `tokens`.
    pub pos: Vec<PosTag>,
    /// Dependency arcs; every non-root token has exactly one incoming arc.
    pub deps: Vec<DepArc>,
    /// Token indices flagged as polarity-reversing.
    pub neg_markers: Vec<usize>,
    /// Tense class to token indices.
    pub tense_markers: BTreeMap<Tense, Vec<usize>>,
    /// Aspect class to token indices.
    pub aspect_markers: BTreeMap<Aspect, Vec<usize>>,
}

impl Analysis {
    /// The empty analysis (for empty input).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the analysis carries no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Head index of `idx`, if it has an incoming arc.
    #[must_use]
    pub fn head_of(&self, idx: usize) -> Option<(usize, DepRel)> {
        self.deps
            .iter()
            .find(|arc| arc.dependent == idx)
            .map(|arc| (arc.head, arc.rel))
    }

    /// Dependents of `head`, in token order.
    pub fn children_of(&self, head: usize) -> impl Iterator<Item = &DepArc> {
        self.deps.iter().filter(move |arc| arc.head == head)
    }

    /// True if walking head arcs upward from `idx` reaches `pred`
    /// (or `idx == pred`). This is the association test used by the OPS
    /// extractor to tie markers to a predicate.
    #[must_use]
    pub fn governed_by(&self, idx: usize, pred: usize) -> bool {
        let mut cur = idx;
        // Bounded walk; arcs are acyclic but guard against parser noise.
        for _ in 0..=self.tokens.len() {
            if cur == pred {
                return true;
            }
            match self.head_of(cur) {
                Some((head, _)) if head != cur => cur = head,
                _ => return false,
            }
        }
        false
    }

    /// First child of `head` with the given relation, in token order.
    #[must_use]
    pub fn child_with(&self, head: usize, rel: DepRel) -> Option<usize> {
        let mut found: Option<usize> = None;
        for arc in self.children_of(head) {
            if arc.rel == rel {
                found = match found {
                    Some(prev) if prev <= arc.dependent => Some(prev),
                    _ => Some(arc.dependent),
                };
            }
        }
        found
    }
}
