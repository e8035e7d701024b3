//! META: speech-act and epistemic tagging (C5).
//!
//! Sentence-scoped, not per-predicate. Rules apply in priority order and
//! the first match wins. EMOTIVE and IRONIC are reserved members of the
//! closed set; no rule in this implementation emits them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, DepRel, PosTag};
use crate::lexicon::LanguageProfile;

/// Speech-act / epistemic tag carried by a CSC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Meta {
    /// Plain declarative statement.
    Assertive,
    /// Interrogative.
    Question,
    /// Imperative.
    Command,
    /// Hedged / epistemically weak.
    Uncertain,
    /// Reported or inferred information.
    Evidential,
    /// Reserved: emotionally loaded. Never emitted.
    Emotive,
    /// Reserved: ironic. Never emitted.
    Ironic,
}

impl Meta {
    /// Every member of the closed META set.
    pub const ALL: [Self; 7] = [
        Self::Assertive,
        Self::Question,
        Self::Command,
        Self::Uncertain,
        Self::Evidential,
        Self::Emotive,
        Self::Ironic,
    ];

    /// Uppercase ASCII symbol name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assertive => "ASSERTIVE",
            Self::Question => "QUESTION",
            Self::Command => "COMMAND",
            Self::Uncertain => "UNCERTAIN",
            Self::Evidential => "EVIDENTIAL",
            Self::Emotive => "EMOTIVE",
            Self::Ironic => "IRONIC",
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the sentence-level META tag.
#[derive(Debug, Clone, Copy)]
pub struct MetaDetector {
    profile: &'static LanguageProfile,
}

impl MetaDetector {
    /// Creates a detector over the given language profile.
    #[must_use]
    pub const fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// Runs the priority rules. Returns `None` only for empty analyses.
    #[must_use]
    pub fn detect(&self, analysis: &Analysis) -> Option<Meta> {
        if analysis.is_empty() {
            return None;
        }

        if self.is_question(analysis) {
            return Some(Meta::Question);
        }
        if self.is_command(analysis) {
            return Some(Meta::Command);
        }
        if self.is_uncertain(analysis) {
            return Some(Meta::Uncertain);
        }
        if self.is_evidential(analysis) {
            return Some(Meta::Evidential);
        }
        Some(Meta::Assertive)
    }

    /// Terminal `?`, a WH-word up front, or an auxiliary-fronted clause.
    fn is_question(&self, analysis: &Analysis) -> bool {
        if analysis.tokens.iter().any(|t| t == "?") {
            return true;
        }

        let first_word = analysis
            .pos
            .iter()
            .position(|&p| p != PosTag::Punct);
        let Some(first) = first_word else { return false };

        let lower = analysis.tokens[first].to_lowercase();
        if self.profile.question_words.contains(&lower.as_str()) {
            return true;
        }

        // Yes/no inversion: sentence-initial auxiliary followed by a
        // nominal before any main verb.
        if analysis.pos[first] == PosTag::Aux {
            let next_nominal = analysis.pos[first + 1..]
                .iter()
                .position(|p| p.is_nominal());
            let next_verb = analysis.pos[first + 1..]
                .iter()
                .position(|&p| p == PosTag::Verb);
            if let Some(nom) = next_nominal {
                return next_verb.map_or(true, |v| nom < v);
            }
        }

        false
    }

    /// Leading base-form verb with no overt subject.
    fn is_command(&self, analysis: &Analysis) -> bool {
        let tokens_lower: Vec<String> =
            analysis.tokens.iter().map(|t| t.to_lowercase()).collect();

        if tokens_lower
            .iter()
            .any(|t| self.profile.politeness_words.contains(&t.as_str()))
        {
            return true;
        }

        let Some(first) = analysis.pos.iter().position(|&p| p != PosTag::Punct) else {
            return false;
        };
        if analysis.pos[first] != PosTag::Verb {
            return false;
        }
        // An overt subject rules out the imperative reading.
        !analysis
            .deps
            .iter()
            .any(|arc| arc.head == first && matches!(arc.rel, DepRel::Nsubj | DepRel::NsubjPass))
    }

    /// Hedge adverbs anywhere; hedge verbs only under a first-person
    /// subject ("I think ..."), so third-person reports stay assertive.
    fn is_uncertain(&self, analysis: &Analysis) -> bool {
        for (i, token) in analysis.tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            if self.profile.hedge_words.contains(&lower.as_str()) {
                return true;
            }
            if self.profile.hedge_verbs.contains(&analysis.lemmas[i].as_str()) {
                let first_person_subject = analysis.deps.iter().any(|arc| {
                    arc.head == i
                        && arc.rel == DepRel::Nsubj
                        && self
                            .profile
                            .is_first_person(&analysis.tokens[arc.dependent].to_lowercase())
                });
                if first_person_subject {
                    return true;
                }
            }
        }
        false
    }

    fn is_evidential(&self, analysis: &Analysis) -> bool {
        analysis
            .tokens
            .iter()
            .any(|t| self.profile.evidential_words.contains(&t.to_lowercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;
    use crate::parser::{RuleParser, ShallowParser};

    fn detect_en(text: &str) -> Option<Meta> {
        let parser = RuleParser::new(Language::En);
        MetaDetector::new(Language::En.profile()).detect(&parser.analyze(text))
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(detect_en(""), None);
    }

    #[test]
    fn terminal_question_mark() {
        assert_eq!(detect_en("Did the cat sleep?"), Some(Meta::Question));
    }

    #[test]
    fn wh_question_without_mark() {
        assert_eq!(detect_en("Where did she go"), Some(Meta::Question));
    }

    #[test]
    fn imperative() {
        assert_eq!(detect_en("Run!"), Some(Meta::Command));
        assert_eq!(detect_en("Close the door"), Some(Meta::Command));
    }

    #[test]
    fn declarative_with_subject_is_not_command() {
        assert_eq!(detect_en("She gave him a book."), Some(Meta::Assertive));
    }

    #[test]
    fn hedges() {
        assert_eq!(detect_en("Maybe he went home."), Some(Meta::Uncertain));
        assert_eq!(detect_en("I think he went home."), Some(Meta::Uncertain));
        // Third-person cognition reports stay assertive.
        assert_eq!(detect_en("She thinks about math."), Some(Meta::Assertive));
    }

    #[test]
    fn evidential() {
        assert_eq!(detect_en("Apparently he went home."), Some(Meta::Evidential));
    }

    #[test]
    fn question_outranks_hedge() {
        assert_eq!(detect_en("Maybe he left?"), Some(Meta::Question));
    }
}
