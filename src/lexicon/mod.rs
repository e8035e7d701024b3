//! Per-language lexical profiles.
//!
//! A profile is the frozen "model" behind the rule parser: closed word
//! lists and inflection tables for one language. Profiles are `'static`
//! data, initialized at compile time and never mutated; the profile
//! identifier (`model_id`) names the frozen parser model in use.
//!
//! The ROOT/OPS/ROLE/META alphabets are shared across all profiles; only
//! the marker lists and the lemma inventories vary.

mod de;
mod en;
mod es;
mod fr;
mod it;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

/// Supported input languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Italian.
    It,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 5] = [Self::En, Self::Es, Self::Fr, Self::De, Self::It];

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
        }
    }

    /// Parses an ISO 639-1 code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Comma-separated supported codes, for error messages.
    #[must_use]
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The frozen lexicon profile for this language.
    #[must_use]
    pub const fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::En => &en::PROFILE,
            Self::Es => &es::PROFILE,
            Self::Fr => &fr::PROFILE,
            Self::De => &de::PROFILE,
            Self::It => &it::PROFILE,
        }
    }
}

/// Morphological class of a recognized verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbMorph {
    /// Uninflected base form.
    Base,
    /// Finite present form.
    Present,
    /// Finite past form.
    Past,
    /// Synthetic future form.
    Future,
    /// Past participle.
    Participle,
    /// Gerund / present participle.
    Gerund,
}

/// Frozen lexical tables for one language.
///
/// All slices are sorted where lookup performance matters; membership
/// checks go through the helper methods below so call sites stay
/// oblivious to the storage layout.
#[derive(Debug)]
pub struct LanguageProfile {
    /// The language this profile describes.
    pub language: Language,
    /// Frozen parser-model identifier (part of the public configuration).
    pub model_id: &'static str,

    /// Determiners and articles.
    pub determiners: &'static [&'static str],
    /// Personal pronouns.
    pub pronouns: &'static [&'static str],
    /// First-person subject pronouns (hedge-verb anchoring).
    pub first_person: &'static [&'static str],
    /// Auxiliary and modal surface forms.
    pub auxiliaries: &'static [&'static str],
    /// Adpositions.
    pub adpositions: &'static [&'static str],
    /// Coordinating conjunctions.
    pub conjunctions: &'static [&'static str],
    /// Subordinating conjunctions.
    pub subordinators: &'static [&'static str],
    /// Closed adverb list (plus habitual/evidential adverbs below).
    pub adverbs: &'static [&'static str],
    /// Closed adjective list.
    pub adjectives: &'static [&'static str],
    /// Bare temporal nouns ("tomorrow").
    pub temporal_nouns: &'static [&'static str],

    /// Polarity-reversing words.
    pub negation_words: &'static [&'static str],
    /// Future auxiliary / periphrastic markers.
    pub future_markers: &'static [&'static str],
    /// Synthetic-future verb suffixes (empty where the language has none).
    pub future_suffixes: &'static [&'static str],
    /// Modal surface form to operator.
    pub modal_operators: &'static [(&'static str, Operator)],
    /// Causation lemma to operator.
    pub causation_operators: &'static [(&'static str, Operator)],
    /// Direction particle to operator.
    pub direction_operators: &'static [(&'static str, Operator)],
    /// Progressive auxiliary lemmas.
    pub continuous_aux: &'static [&'static str],
    /// Perfect auxiliary lemmas.
    pub perfect_aux: &'static [&'static str],
    /// Passive auxiliary lemmas.
    pub passive_aux: &'static [&'static str],
    /// Passive agent-phrase markers ("by").
    pub agent_markers: &'static [&'static str],
    /// Habituality adverbs.
    pub habitual_adverbs: &'static [&'static str],

    /// Preposition to default role.
    pub preposition_roles: &'static [(&'static str, Role)],

    /// Sentence-initial interrogatives.
    pub question_words: &'static [&'static str],
    /// Imperative cue words ("please").
    pub politeness_words: &'static [&'static str],
    /// Epistemic hedge words.
    pub hedge_words: &'static [&'static str],
    /// Hedge verbs requiring a first-person subject.
    pub hedge_verbs: &'static [&'static str],
    /// Evidential adverbs.
    pub evidential_words: &'static [&'static str],

    /// Language-specific predicate lemma to ROOT table (empty for
    /// English, whose lemmas live in the shared core dictionary).
    pub predicate_roots: &'static [(&'static str, Root)],
    /// Verb lemmas recognizable by the tagger but absent from the
    /// predicate dictionaries (they resolve through the fallback ROOT).
    pub extra_verbs: &'static [&'static str],

    /// Irregular finite present forms (surface, lemma).
    pub present_verb_forms: &'static [(&'static str, &'static str)],
    /// Irregular finite past forms (surface, lemma).
    pub past_verb_forms: &'static [(&'static str, &'static str)],
    /// Irregular past participles (surface, lemma).
    pub participle_forms: &'static [(&'static str, &'static str)],
}

fn lookup<'a>(table: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

impl LanguageProfile {
    /// True if `word` is a determiner.
    #[must_use]
    pub fn is_determiner(&self, word: &str) -> bool {
        contains(self.determiners, word)
    }

    /// True if `word` is a personal pronoun.
    #[must_use]
    pub fn is_pronoun(&self, word: &str) -> bool {
        contains(self.pronouns, word)
    }

    /// True if `word` is a first-person subject pronoun.
    #[must_use]
    pub fn is_first_person(&self, word: &str) -> bool {
        contains(self.first_person, word)
    }

    /// True if `word` is an auxiliary or modal surface form.
    #[must_use]
    pub fn is_auxiliary(&self, word: &str) -> bool {
        contains(self.auxiliaries, word)
    }

    /// True if `word` is an adposition.
    #[must_use]
    pub fn is_adposition(&self, word: &str) -> bool {
        contains(self.adpositions, word)
    }

    /// True if `word` is a negation marker.
    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        contains(self.negation_words, word)
            || (self.language == Language::En && word.ends_with("n't"))
    }

    /// True if `word` is a bare temporal noun.
    #[must_use]
    pub fn is_temporal_noun(&self, word: &str) -> bool {
        contains(self.temporal_nouns, word)
    }

    /// Modal operator for a surface form, if any.
    #[must_use]
    pub fn modal_operator(&self, word: &str) -> Option<Operator> {
        self.modal_operators
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, op)| *op)
    }

    /// Causation operator for a lemma, if any.
    #[must_use]
    pub fn causation_operator(&self, lemma: &str) -> Option<Operator> {
        self.causation_operators
            .iter()
            .find(|(w, _)| *w == lemma)
            .map(|(_, op)| *op)
    }

    /// Direction operator for a particle, if any.
    #[must_use]
    pub fn direction_operator(&self, word: &str) -> Option<Operator> {
        self.direction_operators
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, op)| *op)
    }

    /// Default role for a preposition, if mapped.
    #[must_use]
    pub fn preposition_role(&self, word: &str) -> Option<Role> {
        self.preposition_roles
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, role)| *role)
    }

    /// ROOT for a language-specific predicate lemma, if mapped.
    #[must_use]
    pub fn predicate_root(&self, lemma: &str) -> Option<Root> {
        self.predicate_roots
            .iter()
            .find(|(l, _)| *l == lemma)
            .map(|(_, root)| *root)
    }

    /// True if `lemma` is a verb this profile can recognize.
    #[must_use]
    pub fn knows_verb(&self, lemma: &str) -> bool {
        contains(self.extra_verbs, lemma)
            || self.predicate_root(lemma).is_some()
            || (self.language == Language::En && crate::root_map::is_known_predicate(lemma))
    }

    /// Resolves a synthetic-future surface form to its lemma, if the
    /// language has future suffixes and the stem resolves to a known
    /// verb ("correrá" -> "correr").
    #[must_use]
    pub fn future_verb_lemma(&self, word: &str) -> Option<String> {
        for suffix in self.future_suffixes {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                for candidate in [stem.to_string(), format!("{stem}r"), format!("{stem}re")] {
                    if self.knows_verb(&candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    /// Resolves a lowercased surface form to a verb lemma and its
    /// morphological class, if this profile recognizes it as a verb.
    ///
    /// Lookup order: irregular tables first, then the language's
    /// deterministic suffix rules, then the surface form itself.
    #[must_use]
    pub fn verb_lemma(&self, word: &str) -> Option<(String, VerbMorph)> {
        if let Some(lemma) = lookup(self.past_verb_forms, word) {
            return Some((lemma.to_string(), VerbMorph::Past));
        }
        if let Some(lemma) = lookup(self.participle_forms, word) {
            return Some((lemma.to_string(), VerbMorph::Participle));
        }
        if let Some(lemma) = lookup(self.present_verb_forms, word) {
            return Some((lemma.to_string(), VerbMorph::Present));
        }

        match self.language {
            Language::En => self.verb_lemma_en(word),
            Language::Es => self.verb_lemma_suffix(word, &["r"], VerbMorph::Present),
            Language::It => self.verb_lemma_suffix(word, &["re"], VerbMorph::Present),
            Language::Fr => self.verb_lemma_suffix(word, &["r"], VerbMorph::Present),
            Language::De => self.verb_lemma_de(word),
        }
        .or_else(|| {
            if self.knows_verb(word) {
                Some((word.to_string(), VerbMorph::Base))
            } else {
                None
            }
        })
    }

    fn verb_lemma_suffix(
        &self,
        word: &str,
        suffixes: &[&str],
        morph: VerbMorph,
    ) -> Option<(String, VerbMorph)> {
        for suffix in suffixes {
            let candidate = format!("{word}{suffix}");
            if self.knows_verb(&candidate) {
                return Some((candidate, morph));
            }
        }
        None
    }

    fn verb_lemma_en(&self, word: &str) -> Option<(String, VerbMorph)> {
        let try_known = |candidate: String, morph: VerbMorph| {
            if self.knows_verb(&candidate) {
                Some((candidate, morph))
            } else {
                None
            }
        };

        if let Some(stem) = word.strip_suffix("ing") {
            if word.len() > 4 {
                if let Some(hit) = try_known(stem.to_string(), VerbMorph::Gerund) {
                    return Some(hit);
                }
                if let Some(hit) = try_known(format!("{stem}e"), VerbMorph::Gerund) {
                    return Some(hit);
                }
                // Doubled final consonant: running -> run.
                let bytes = stem.as_bytes();
                if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                    if let Some(hit) =
                        try_known(stem[..stem.len() - 1].to_string(), VerbMorph::Gerund)
                    {
                        return Some(hit);
                    }
                }
            }
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if let Some(hit) = try_known(format!("{stem}y"), VerbMorph::Past) {
                return Some(hit);
            }
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if let Some(hit) = try_known(stem.to_string(), VerbMorph::Past) {
                return Some(hit);
            }
            if let Some(hit) = try_known(format!("{stem}e"), VerbMorph::Past) {
                return Some(hit);
            }
            let bytes = stem.as_bytes();
            if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                if let Some(hit) = try_known(stem[..stem.len() - 1].to_string(), VerbMorph::Past) {
                    return Some(hit);
                }
            }
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if let Some(hit) = try_known(format!("{stem}y"), VerbMorph::Present) {
                return Some(hit);
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if let Some(hit) = try_known(stem.to_string(), VerbMorph::Present) {
                return Some(hit);
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if let Some(hit) = try_known(stem.to_string(), VerbMorph::Present) {
                return Some(hit);
            }
        }
        None
    }

    fn verb_lemma_de(&self, word: &str) -> Option<(String, VerbMorph)> {
        if let Some(stem) = word.strip_suffix('t') {
            let candidate = format!("{stem}en");
            if self.knows_verb(&candidate) {
                return Some((candidate, VerbMorph::Present));
            }
        }
        if word.ends_with("en") && self.knows_verb(word) {
            return Some((word.to_string(), VerbMorph::Base));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("zz"), None);
    }

    #[test]
    fn every_profile_declares_a_model() {
        for lang in Language::ALL {
            let profile = lang.profile();
            assert_eq!(profile.language, lang);
            assert!(profile.model_id.starts_with(lang.code()));
        }
    }

    #[test]
    fn english_irregulars_resolve() {
        let en = Language::En.profile();
        assert_eq!(
            en.verb_lemma("gave"),
            Some(("give".to_string(), VerbMorph::Past))
        );
        assert_eq!(
            en.verb_lemma("went"),
            Some(("go".to_string(), VerbMorph::Past))
        );
        assert_eq!(
            en.verb_lemma("running"),
            Some(("run".to_string(), VerbMorph::Gerund))
        );
        assert_eq!(
            en.verb_lemma("walks"),
            Some(("walk".to_string(), VerbMorph::Present))
        );
        assert_eq!(en.verb_lemma("table"), None);
    }

    #[test]
    fn spanish_present_resolves_by_suffix() {
        let es = Language::Es.profile();
        assert_eq!(
            es.verb_lemma("corre"),
            Some(("correr".to_string(), VerbMorph::Present))
        );
    }

    #[test]
    fn contraction_negation() {
        let en = Language::En.profile();
        assert!(en.is_negation("not"));
        assert!(en.is_negation("n't"));
        assert!(en.is_negation("don't"));
        assert!(!en.is_negation("knot"));
    }
}
