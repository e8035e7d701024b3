//! Operator extraction (C3).
//!
//! One strictly ascending pass over the token indices. A cue counts only
//! when its dependency chain reaches the predicate. Cues sharing an index
//! emit in the fixed category priority polarity, modality, aspect,
//! temporal, causation, direction; cues at different indices emit in
//! source order. The resulting sequence is a list, not a set: order is
//! semantically significant and consumers must preserve it exactly.

use crate::analysis::{Analysis, Aspect, DepRel, PosTag, Tense};
use crate::lexicon::LanguageProfile;
use crate::operator::Operator;

/// Extracts the ordered operator sequence for one predicate.
#[derive(Debug, Clone, Copy)]
pub struct OpsExtractor {
    profile: &'static LanguageProfile,
}

impl OpsExtractor {
    /// Creates an extractor over the given language profile.
    #[must_use]
    pub const fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// Extracts operators for the predicate at `pred`.
    ///
    /// If the scan yields no temporal operator, PRESENT is appended as
    /// the default tense.
    #[must_use]
    pub fn extract(&self, analysis: &Analysis, pred: usize) -> Vec<Operator> {
        let mut ops: Vec<Operator> = Vec::new();
        let push_once = |ops: &mut Vec<Operator>, op: Operator| {
            if !ops.contains(&op) {
                ops.push(op);
            }
        };

        for idx in 0..analysis.tokens.len() {
            if !analysis.governed_by(idx, pred) {
                continue;
            }

            let lower = analysis.tokens[idx].to_lowercase();
            let lemma = analysis.lemmas[idx].as_str();

            // Polarity.
            if analysis.neg_markers.contains(&idx) {
                push_once(&mut ops, Operator::Negation);
            }

            // Modality.
            if let Some(op) = self
                .profile
                .modal_operator(&lower)
                .or_else(|| self.profile.modal_operator(lemma))
            {
                push_once(&mut ops, op);
            }

            // Aspect.
            for (&aspect, indices) in &analysis.aspect_markers {
                if indices.contains(&idx) {
                    push_once(&mut ops, Self::aspect_op(aspect));
                }
            }

            // Temporal.
            for (&tense, indices) in &analysis.tense_markers {
                if indices.contains(&idx) {
                    push_once(&mut ops, Self::tense_op(tense));
                }
            }

            // Causation, keyed on the lemma.
            if let Some(op) = self.profile.causation_operator(lemma) {
                push_once(&mut ops, op);
            }

            // Direction: only object-less particles. Prepositions with an
            // object are consumed by the roles binder instead.
            if matches!(analysis.pos[idx], PosTag::Adp | PosTag::Adv | PosTag::Part)
                && analysis.child_with(idx, DepRel::Pobj).is_none()
            {
                if let Some(op) = self.profile.direction_operator(&lower) {
                    push_once(&mut ops, op);
                }
            }
        }

        if !ops
            .iter()
            .any(|op| matches!(op, Operator::Past | Operator::Present | Operator::Future))
        {
            ops.push(Operator::Present);
        }

        ops
    }

    const fn tense_op(tense: Tense) -> Operator {
        match tense {
            Tense::Past => Operator::Past,
            Tense::Present => Operator::Present,
            Tense::Future => Operator::Future,
        }
    }

    const fn aspect_op(aspect: Aspect) -> Operator {
        match aspect {
            Aspect::Continuous => Operator::Continuous,
            Aspect::Completed => Operator::Completed,
            Aspect::Habitual => Operator::Habitual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;
    use crate::parser::{RuleParser, ShallowParser};

    fn extract_en(text: &str) -> Vec<Operator> {
        let parser = RuleParser::new(Language::En);
        let analysis = parser.analyze(text);
        let pred = analysis
            .pos
            .iter()
            .position(|&p| p == PosTag::Verb)
            .or_else(|| analysis.pos.iter().position(|&p| p == PosTag::Aux))
            .expect("predicate");
        OpsExtractor::new(Language::En.profile()).extract(&analysis, pred)
    }

    #[test]
    fn canonical_future_negation_order() {
        let ops = extract_en("The boy will not go to school tomorrow.");
        assert_eq!(ops, vec![Operator::Future, Operator::Negation]);
    }

    #[test]
    fn position_determines_order() {
        // Negation precedes the future marker here, so the sequence
        // inverts: the two sentences serialize differently.
        let a = extract_en("The boy will not go.");
        let b = extract_en("Never will the boy go.");
        assert_eq!(a, vec![Operator::Future, Operator::Negation]);
        assert_eq!(b, vec![Operator::Negation, Operator::Future]);
    }

    #[test]
    fn past_from_irregular_verb() {
        assert_eq!(extract_en("She gave him a book."), vec![Operator::Past]);
    }

    #[test]
    fn default_present_for_bare_imperative() {
        assert_eq!(extract_en("Run!"), vec![Operator::Present]);
    }

    #[test]
    fn modality_then_default_tense() {
        let ops = extract_en("She can swim.");
        assert_eq!(ops, vec![Operator::Possible, Operator::Present]);
    }

    #[test]
    fn progressive_present() {
        let ops = extract_en("She is running.");
        assert_eq!(ops, vec![Operator::Continuous, Operator::Present]);
    }

    #[test]
    fn direction_particle_without_object() {
        let ops = extract_en("She walked away.");
        assert!(ops.contains(&Operator::Away));
        assert!(ops.contains(&Operator::Past));
    }

    #[test]
    fn preposition_with_object_emits_no_direction() {
        let ops = extract_en("The boy will not go to school tomorrow.");
        assert!(!ops.contains(&Operator::Toward));
    }

    #[test]
    fn self_initiated_causation() {
        let ops = extract_en("She decided quickly.");
        assert_eq!(ops, vec![Operator::Past, Operator::SelfInitiated]);
    }
}
