//! Lexicon POS tagger and lemmatizer.
//!
//! Tags are assigned by closed-list lookup with morphological fallbacks.
//! The tagger is a pure function of the token sequence and the profile;
//! no state survives a call.

use crate::analysis::PosTag;
use crate::lexicon::{LanguageProfile, VerbMorph};

use super::tokenize::is_punct_token;

/// Per-token tagging output.
#[derive(Debug, Clone)]
pub struct Tagged {
    /// Lowercased lemma (verb lemma where recognized, surface otherwise).
    pub lemmas: Vec<String>,
    /// POS tag per token.
    pub pos: Vec<PosTag>,
    /// Verb morphology where the token is a recognized verb form.
    pub morphs: Vec<Option<VerbMorph>>,
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// English infinitival "to": followed by a base-form verb.
fn is_infinitival_to(tokens: &[String], i: usize, profile: &LanguageProfile) -> bool {
    let Some(next) = tokens.get(i + 1) else {
        return false;
    };
    matches!(
        profile.verb_lemma(&next.to_lowercase()),
        Some((_, VerbMorph::Base))
    )
}

/// Tags a token sequence.
#[must_use]
pub fn tag(tokens: &[String], profile: &LanguageProfile) -> Tagged {
    let mut lemmas = Vec::with_capacity(tokens.len());
    let mut pos = Vec::with_capacity(tokens.len());
    let mut morphs: Vec<Option<VerbMorph>> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let lower = token.to_lowercase();
        let mut lemma = lower.clone();
        let mut morph = None;

        let tag = if is_punct_token(token) {
            PosTag::Punct
        } else if is_numeric(token) {
            PosTag::Num
        } else if profile.is_negation(&lower) {
            PosTag::Part
        } else if profile.is_determiner(&lower) {
            PosTag::Det
        } else if lower == "to" && is_infinitival_to(tokens, i, profile) {
            PosTag::Part
        } else if profile.is_auxiliary(&lower) {
            if let Some((l, m)) = profile.verb_lemma(&lower) {
                lemma = l;
                morph = Some(m);
            }
            PosTag::Aux
        } else if profile.is_pronoun(&lower) || profile.question_words.contains(&lower.as_str()) {
            PosTag::Pron
        } else if profile.is_adposition(&lower) {
            PosTag::Adp
        } else if profile.conjunctions.contains(&lower.as_str()) {
            PosTag::Cconj
        } else if profile.subordinators.contains(&lower.as_str()) {
            PosTag::Sconj
        } else if profile.politeness_words.contains(&lower.as_str()) {
            PosTag::Intj
        } else if profile.adverbs.contains(&lower.as_str())
            || profile.habitual_adverbs.contains(&lower.as_str())
            || profile.hedge_words.contains(&lower.as_str())
            || profile.evidential_words.contains(&lower.as_str())
        {
            PosTag::Adv
        } else if profile.adjectives.contains(&lower.as_str()) {
            PosTag::Adj
        } else if let Some((l, m)) = profile.verb_lemma(&lower) {
            // Noun/verb ambiguity: a determiner forces the noun reading.
            if i > 0 && pos[i - 1] == PosTag::Det {
                PosTag::Noun
            } else {
                lemma = l;
                morph = Some(m);
                PosTag::Verb
            }
        } else if let Some(l) = profile.future_verb_lemma(&lower) {
            lemma = l;
            morph = Some(VerbMorph::Future);
            PosTag::Verb
        } else if profile.is_temporal_noun(&lower) {
            PosTag::Noun
        } else if i > 0 && token.chars().next().is_some_and(char::is_uppercase) {
            PosTag::Propn
        } else {
            PosTag::Noun
        };

        lemmas.push(lemma);
        pos.push(tag);
        morphs.push(morph);
    }

    Tagged { lemmas, pos, morphs }
}
