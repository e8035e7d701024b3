//! Shallow parsing (C1).
//!
//! The parser is the only component with a "model" behind it, so it hides
//! behind a capability trait: given text, produce an [`Analysis`]. The
//! shipped implementation is [`RuleParser`], a deterministic
//! lexicon-and-heuristic parser with one frozen profile per language.
//! No deep inference, no network, no LLM calls.

mod deps;
mod tagger;
mod tokenize;

pub use deps::DepBuild;
pub use tokenize::tokenize;

use std::collections::BTreeMap;

use crate::analysis::{Analysis, Aspect, PosTag, Tense};
use crate::lexicon::{Language, LanguageProfile, VerbMorph};

/// Capability interface for shallow parsers.
///
/// Implementations must be deterministic: byte-identical input produces
/// an identical analysis. They must also be immutable after construction
/// so one parser can serve concurrent callers.
pub trait ShallowParser: Send + Sync {
    /// Analyzes one sentence (or degenerate fragment).
    fn analyze(&self, text: &str) -> Analysis;

    /// Identifier of the frozen model behind this parser.
    fn model_id(&self) -> &str;
}

/// Deterministic rule-lexicon shallow parser.
#[derive(Debug, Clone, Copy)]
pub struct RuleParser {
    profile: &'static LanguageProfile,
}

impl RuleParser {
    /// Creates a parser for the given language.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { profile: language.profile() }
    }

    /// The profile this parser runs on.
    #[must_use]
    pub const fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    fn negation_markers(&self, tokens: &[String]) -> Vec<usize> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| self.profile.is_negation(&t.to_lowercase()))
            .map(|(i, _)| i)
            .collect()
    }

    fn tense_markers(
        &self,
        tokens: &[String],
        tagged: &tagger::Tagged,
        predicates: &[usize],
    ) -> BTreeMap<Tense, Vec<usize>> {
        let mut markers: BTreeMap<Tense, Vec<usize>> = BTreeMap::new();

        for (i, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            let lemma = &tagged.lemmas[i];

            if self.profile.future_markers.contains(&lower.as_str())
                || self.profile.future_markers.contains(&lemma.as_str())
                || tagged.morphs[i] == Some(VerbMorph::Future)
            {
                markers.entry(Tense::Future).or_default().push(i);
                continue;
            }

            match tagged.morphs[i] {
                Some(VerbMorph::Past) => {
                    markers.entry(Tense::Past).or_default().push(i);
                }
                Some(VerbMorph::Present) => {
                    // Finite present counts only on main verbs or on an
                    // auxiliary serving as the clause predicate, so that
                    // auxiliaries of periphrastic forms stay silent.
                    if tagged.pos[i] == PosTag::Verb || predicates.contains(&i) {
                        markers.entry(Tense::Present).or_default().push(i);
                    }
                }
                _ => {}
            }
        }

        markers
    }

    fn aspect_markers(
        &self,
        tokens: &[String],
        tagged: &tagger::Tagged,
    ) -> BTreeMap<Aspect, Vec<usize>> {
        let mut markers: BTreeMap<Aspect, Vec<usize>> = BTreeMap::new();
        let n = tokens.len();

        for i in 0..n {
            let lower = tokens[i].to_lowercase();
            let lemma = tagged.lemmas[i].as_str();

            if self.profile.habitual_adverbs.contains(&lower.as_str()) {
                markers.entry(Aspect::Habitual).or_default().push(i);
                continue;
            }

            if tagged.pos[i] != PosTag::Aux {
                continue;
            }

            if self.profile.continuous_aux.contains(&lemma) {
                let follows_gerund = (i + 1..n.min(i + 4)).any(|j| {
                    tagged.pos[j] == PosTag::Verb
                        && (tagged.morphs[j] == Some(VerbMorph::Gerund)
                            || tokens[j].to_lowercase().ends_with("ndo"))
                });
                if follows_gerund {
                    markers.entry(Aspect::Continuous).or_default().push(i);
                    continue;
                }
            }

            if self.profile.perfect_aux.contains(&lemma) {
                let follows_participle = (i + 1..n.min(i + 4)).any(|j| {
                    tagged.pos[j] == PosTag::Verb
                        && tagged.morphs[j] == Some(VerbMorph::Participle)
                });
                if follows_participle {
                    markers.entry(Aspect::Completed).or_default().push(i);
                }
            }
        }

        markers
    }
}

impl ShallowParser for RuleParser {
    fn analyze(&self, text: &str) -> Analysis {
        if text.trim().is_empty() {
            return Analysis::empty();
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Analysis::empty();
        }

        let tagged = tagger::tag(&tokens, self.profile);
        let built = deps::build(&tokens, &tagged, self.profile);

        let neg_markers = self.negation_markers(&tokens);
        let tense_markers = self.tense_markers(&tokens, &tagged, &built.predicates);
        let aspect_markers = self.aspect_markers(&tokens, &tagged);

        Analysis {
            tokens,
            lemmas: tagged.lemmas,
            pos: tagged.pos,
            deps: built.arcs,
            neg_markers,
            tense_markers,
            aspect_markers,
        }
    }

    fn model_id(&self) -> &str {
        self.profile.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_en(text: &str) -> Analysis {
        RuleParser::new(Language::En).analyze(text)
    }

    #[test]
    fn empty_input_yields_empty_analysis() {
        let a = analyze_en("");
        assert!(a.is_empty());
        assert!(a.deps.is_empty());
        assert!(a.neg_markers.is_empty());
    }

    #[test]
    fn canonical_markers() {
        let a = analyze_en("The boy will not go to school tomorrow.");
        assert_eq!(a.neg_markers, vec![3]);
        assert_eq!(a.tense_markers.get(&Tense::Future), Some(&vec![2]));
        assert_eq!(a.tense_markers.get(&Tense::Past), None);
        assert_eq!(a.tense_markers.get(&Tense::Present), None);
    }

    #[test]
    fn past_marker_on_aux_initial_question() {
        let a = analyze_en("Did the cat sleep?");
        assert_eq!(a.tense_markers.get(&Tense::Past), Some(&vec![0]));
    }

    #[test]
    fn progressive_aspect() {
        let a = analyze_en("She is running to school.");
        assert_eq!(a.aspect_markers.get(&Aspect::Continuous), Some(&vec![1]));
    }

    #[test]
    fn perfect_aspect() {
        let a = analyze_en("She has written a book.");
        assert_eq!(a.aspect_markers.get(&Aspect::Completed), Some(&vec![1]));
    }

    #[test]
    fn habitual_adverb() {
        let a = analyze_en("He usually walks to work.");
        assert_eq!(a.aspect_markers.get(&Aspect::Habitual), Some(&vec![1]));
    }

    #[test]
    fn spanish_present() {
        let a = RuleParser::new(Language::Es).analyze("El niño corre.");
        assert_eq!(a.tense_markers.get(&Tense::Present), Some(&vec![2]));
        assert!(a.neg_markers.is_empty());
    }

    #[test]
    fn determinism_same_input_same_analysis() {
        let a = analyze_en("The boy will not go to school tomorrow.");
        let b = analyze_en("The boy will not go to school tomorrow.");
        assert_eq!(a, b);
    }

    #[test]
    fn unparsable_text_degrades_to_tokens() {
        let a = analyze_en("zxqv wvvx qqzz");
        assert_eq!(a.tokens.len(), 3);
        // Tokens exist; some arcs may, but nothing panics and markers
        // stay within bounds.
        for arc in &a.deps {
            assert!(arc.head < 3 && arc.dependent < 3);
        }
    }
}
