//! Predicate-to-ROOT mapping (C2).
//!
//! The core dictionary keys English lemmas to ROOT candidates and is
//! identical across every instantiation of the encoder. Non-English
//! lemmas resolve through their language profile's own table first, then
//! fall through the disambiguation and fallback ladder. The mapping is a
//! total function: it never fails.

use crate::analysis::{DepRel, PosTag};
use crate::lexicon::LanguageProfile;
use crate::root::Root;

/// Dependency context handed to the mapper: the relation labels of the
/// predicate's dependents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepContext<'a> {
    /// Relations of arcs headed by the predicate.
    pub relations: &'a [DepRel],
}

/// Core predicate dictionary, sorted by lemma for binary search.
///
/// Ambiguous lemmas list every candidate; disambiguation is contextual
/// and, as a last resort, lexicographic on the ROOT symbol.
static PREDICATE_TABLE: &[(&str, &[Root])] = &[
    ("acquire", &[Root::Possession]),
    ("adapt", &[Root::Change]),
    ("adjust", &[Root::Change]),
    ("aim", &[Root::Intention]),
    ("alter", &[Root::Change]),
    ("announce", &[Root::Communication]),
    ("answer", &[Root::Communication]),
    ("approach", &[Root::Motion]),
    ("argue", &[Root::Communication]),
    ("arrive", &[Root::Motion]),
    ("ask", &[Root::Communication]),
    ("attempt", &[Root::Intention]),
    ("be", &[Root::Existence]),
    ("become", &[Root::Change]),
    ("believe", &[Root::Cognition]),
    ("borrow", &[Root::Transfer]),
    ("break", &[Root::Destruction]),
    ("build", &[Root::Creation]),
    ("burn", &[Root::Destruction]),
    ("change", &[Root::Change]),
    ("choose", &[Root::Cognition]),
    ("climb", &[Root::Motion]),
    ("come", &[Root::Motion]),
    ("communicate", &[Root::Communication]),
    ("compose", &[Root::Creation]),
    ("consider", &[Root::Cognition]),
    ("construct", &[Root::Creation]),
    ("continue", &[Root::Existence]),
    ("contract", &[Root::Change]),
    ("convert", &[Root::Change]),
    ("craft", &[Root::Creation]),
    ("create", &[Root::Creation]),
    ("crush", &[Root::Destruction]),
    ("cut", &[Root::Destruction]),
    ("damage", &[Root::Destruction]),
    ("dash", &[Root::Motion]),
    ("debate", &[Root::Communication]),
    ("decide", &[Root::Cognition]),
    ("declare", &[Root::Communication]),
    ("delete", &[Root::Destruction]),
    ("deliver", &[Root::Transfer]),
    ("demolish", &[Root::Destruction]),
    ("depart", &[Root::Motion]),
    ("descend", &[Root::Motion]),
    ("describe", &[Root::Communication]),
    ("design", &[Root::Creation]),
    ("desire", &[Root::Intention]),
    ("destroy", &[Root::Destruction]),
    ("detect", &[Root::Perception]),
    ("develop", &[Root::Change, Root::Creation]),
    ("die", &[Root::Existence]),
    ("discover", &[Root::Perception]),
    ("discuss", &[Root::Communication]),
    ("dissolve", &[Root::Destruction]),
    ("donate", &[Root::Transfer]),
    ("doubt", &[Root::Cognition]),
    ("draw", &[Root::Creation]),
    ("dream", &[Root::Cognition]),
    ("drive", &[Root::Motion]),
    ("endure", &[Root::Existence]),
    ("enter", &[Root::Motion]),
    ("erase", &[Root::Destruction]),
    ("evolve", &[Root::Change]),
    ("exist", &[Root::Existence]),
    ("exit", &[Root::Motion]),
    ("expand", &[Root::Change]),
    ("explain", &[Root::Communication]),
    ("fall", &[Root::Motion]),
    ("feel", &[Root::Perception]),
    ("find", &[Root::Perception]),
    ("fly", &[Root::Motion]),
    ("forget", &[Root::Cognition]),
    ("form", &[Root::Creation]),
    ("gain", &[Root::Possession]),
    ("generate", &[Root::Creation]),
    ("give", &[Root::Transfer]),
    ("go", &[Root::Motion]),
    ("grow", &[Root::Change]),
    ("hand", &[Root::Transfer]),
    ("happen", &[Root::Existence]),
    ("have", &[Root::Possession]),
    ("hear", &[Root::Perception]),
    ("hold", &[Root::Possession]),
    ("hope", &[Root::Intention]),
    ("hurry", &[Root::Motion]),
    ("imagine", &[Root::Cognition]),
    ("improve", &[Root::Change]),
    ("intend", &[Root::Intention]),
    ("invent", &[Root::Creation]),
    ("jog", &[Root::Motion]),
    ("jump", &[Root::Motion]),
    ("keep", &[Root::Possession]),
    ("know", &[Root::Cognition]),
    ("lack", &[Root::Possession]),
    ("last", &[Root::Existence]),
    ("learn", &[Root::Cognition]),
    ("leave", &[Root::Motion]),
    ("lend", &[Root::Transfer]),
    ("listen", &[Root::Perception]),
    ("live", &[Root::Existence]),
    ("look", &[Root::Perception]),
    ("lose", &[Root::Possession]),
    ("make", &[Root::Creation]),
    ("manufacture", &[Root::Creation]),
    ("melt", &[Root::Destruction]),
    ("modify", &[Root::Change]),
    ("move", &[Root::Motion]),
    ("need", &[Root::Possession]),
    ("notice", &[Root::Perception]),
    ("observe", &[Root::Perception]),
    ("obtain", &[Root::Possession]),
    ("occur", &[Root::Existence]),
    ("offer", &[Root::Transfer]),
    ("own", &[Root::Possession]),
    ("paint", &[Root::Creation]),
    ("pass", &[Root::Transfer]),
    ("persist", &[Root::Existence]),
    ("plan", &[Root::Cognition, Root::Intention]),
    ("possess", &[Root::Possession]),
    ("produce", &[Root::Creation]),
    ("provide", &[Root::Transfer]),
    ("pursue", &[Root::Intention]),
    ("realize", &[Root::Cognition]),
    ("receive", &[Root::Transfer]),
    ("remain", &[Root::Existence]),
    ("remember", &[Root::Cognition]),
    ("remove", &[Root::Destruction]),
    ("reply", &[Root::Communication]),
    ("require", &[Root::Possession]),
    ("respond", &[Root::Communication]),
    ("retain", &[Root::Possession]),
    ("return", &[Root::Motion]),
    ("rise", &[Root::Motion]),
    ("rob", &[Root::Transfer]),
    ("ruin", &[Root::Destruction]),
    ("run", &[Root::Motion]),
    ("rush", &[Root::Motion]),
    ("say", &[Root::Communication]),
    ("sculpt", &[Root::Creation]),
    ("see", &[Root::Perception]),
    ("seek", &[Root::Intention]),
    ("send", &[Root::Transfer]),
    ("sense", &[Root::Perception]),
    ("shape", &[Root::Creation]),
    ("shout", &[Root::Communication]),
    ("shrink", &[Root::Change]),
    ("sleep", &[Root::Existence]),
    ("smash", &[Root::Destruction]),
    ("smell", &[Root::Perception]),
    ("speak", &[Root::Communication]),
    ("sprint", &[Root::Motion]),
    ("stay", &[Root::Existence]),
    ("steal", &[Root::Transfer]),
    ("strive", &[Root::Intention]),
    ("study", &[Root::Cognition]),
    ("supply", &[Root::Transfer]),
    ("survive", &[Root::Existence]),
    ("swim", &[Root::Motion]),
    ("take", &[Root::Transfer]),
    ("talk", &[Root::Communication]),
    ("taste", &[Root::Perception]),
    ("tear", &[Root::Destruction]),
    ("tell", &[Root::Communication]),
    ("think", &[Root::Cognition]),
    ("throw", &[Root::Motion]),
    ("touch", &[Root::Perception]),
    ("transform", &[Root::Change]),
    ("travel", &[Root::Motion]),
    ("try", &[Root::Intention]),
    ("turn", &[Root::Change]),
    ("understand", &[Root::Cognition]),
    ("walk", &[Root::Motion]),
    ("want", &[Root::Intention, Root::Possession]),
    ("watch", &[Root::Perception]),
    ("whisper", &[Root::Communication]),
    ("wish", &[Root::Intention]),
    ("wonder", &[Root::Cognition]),
    ("worsen", &[Root::Change]),
    ("wreck", &[Root::Destruction]),
    ("write", &[Root::Creation]),
];

/// Synonym equivalence groups: every lemma in a group must map to the
/// same ROOT.
static SYNONYM_GROUPS: &[&[&str]] = &[
    &["run", "jog", "sprint", "dash", "hurry", "rush"],
    &["go", "travel", "move"],
    &["give", "hand", "pass", "deliver"],
    &["say", "tell", "speak", "talk"],
    &["think", "consider", "believe"],
    &["see", "look", "watch", "observe"],
    &["make", "create", "build", "construct"],
    &["destroy", "demolish", "wreck"],
    &["change", "transform", "alter", "modify"],
    &["have", "own", "possess"],
    &["intend", "aim", "strive"],
    &["exist", "live", "remain"],
];

const ACTION_ROOTS: [Root; 6] = [
    Root::Motion,
    Root::Transfer,
    Root::Communication,
    Root::Creation,
    Root::Destruction,
    Root::Change,
];

const STATE_ROOTS: [Root; 3] = [Root::Existence, Root::Possession, Root::Cognition];

const TRANSITIVE_ROOTS: [Root; 5] = [
    Root::Transfer,
    Root::Creation,
    Root::Destruction,
    Root::Perception,
    Root::Communication,
];

fn core_candidates(lemma: &str) -> Option<&'static [Root]> {
    PREDICATE_TABLE
        .binary_search_by_key(&lemma, |&(key, _)| key)
        .ok()
        .map(|i| PREDICATE_TABLE[i].1)
}

/// True if the lemma has an entry in the core dictionary.
#[must_use]
pub fn is_known_predicate(lemma: &str) -> bool {
    core_candidates(lemma).is_some()
}

/// The synonym equivalence groups (exposed for the property tests).
#[must_use]
pub fn synonym_groups() -> &'static [&'static [&'static str]] {
    SYNONYM_GROUPS
}

/// Maps predicate lemmas to semantic ROOT primitives.
///
/// Construction takes the language profile so that language-specific
/// lemma tables resolve before the shared core dictionary. The mapper is
/// pure: same inputs, same ROOT, regardless of call order.
#[derive(Debug, Clone, Copy)]
pub struct RootMapper {
    profile: &'static LanguageProfile,
}

impl RootMapper {
    /// Creates a mapper over the given language profile.
    #[must_use]
    pub const fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// Maps a predicate lemma to its ROOT. Total; never fails.
    ///
    /// Lookup order: language table, core dictionary (with contextual
    /// disambiguation), morphological fallbacks, then EXISTENCE.
    #[must_use]
    pub fn map(&self, lemma: &str, pos: PosTag, dep_ctx: &DepContext<'_>) -> Root {
        let lemma = lemma.trim().to_lowercase();

        if let Some(root) = self.profile.predicate_root(&lemma) {
            return root;
        }

        if let Some(candidates) = core_candidates(&lemma) {
            if candidates.len() == 1 {
                return candidates[0];
            }
            return Self::disambiguate(candidates, pos, dep_ctx);
        }

        Self::unknown_fallback(pos)
    }

    /// Tie-breaking for ambiguous lemmas.
    ///
    /// Verbs prefer action-class candidates and nominal predicates prefer
    /// state-class candidates (POS filter); a direct object prefers
    /// transitive-class candidates (dependency filter); any remaining tie
    /// resolves to the lexicographically smallest ROOT symbol.
    fn disambiguate(candidates: &[Root], pos: PosTag, dep_ctx: &DepContext<'_>) -> Root {
        let narrowed: Vec<Root> = match pos {
            PosTag::Verb | PosTag::Aux => candidates
                .iter()
                .copied()
                .filter(|r| ACTION_ROOTS.contains(r))
                .collect(),
            PosTag::Noun | PosTag::Propn => candidates
                .iter()
                .copied()
                .filter(|r| STATE_ROOTS.contains(r))
                .collect(),
            _ => Vec::new(),
        };
        let pool: &[Root] = if narrowed.is_empty() { candidates } else { &narrowed };

        if pool.len() > 1 && dep_ctx.relations.contains(&DepRel::Dobj) {
            let transitive: Vec<Root> = pool
                .iter()
                .copied()
                .filter(|r| TRANSITIVE_ROOTS.contains(r))
                .collect();
            if !transitive.is_empty() {
                return Self::lexicographic_min(&transitive);
            }
        }

        Self::lexicographic_min(pool)
    }

    fn lexicographic_min(pool: &[Root]) -> Root {
        pool.iter()
            .copied()
            .min_by(|a, b| a.as_str().cmp(b.as_str()))
            .unwrap_or(Root::FALLBACK)
    }

    /// Fallback for lemmas absent from every dictionary: unknown verbs
    /// read as generic CHANGE, unknown nominal predicates as EXISTENCE.
    const fn unknown_fallback(pos: PosTag) -> Root {
        match pos {
            PosTag::Verb => Root::Change,
            _ => Root::FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;

    fn mapper() -> RootMapper {
        RootMapper::new(Language::En.profile())
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in PREDICATE_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn direct_hits() {
        let m = mapper();
        let ctx = DepContext::default();
        assert_eq!(m.map("go", PosTag::Verb, &ctx), Root::Motion);
        assert_eq!(m.map("give", PosTag::Verb, &ctx), Root::Transfer);
        assert_eq!(m.map("sleep", PosTag::Verb, &ctx), Root::Existence);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        let m = mapper();
        let ctx = DepContext::default();
        assert_eq!(m.map("  Run ", PosTag::Verb, &ctx), Root::Motion);
    }

    #[test]
    fn unknown_verb_falls_back_to_change() {
        let m = mapper();
        let ctx = DepContext::default();
        assert_eq!(m.map("quark", PosTag::Verb, &ctx), Root::Change);
        assert_eq!(m.map("quark", PosTag::Noun, &ctx), Root::Existence);
    }

    #[test]
    fn ambiguous_want_prefers_state_reading_for_nouns() {
        let m = mapper();
        let ctx = DepContext::default();
        // As a verb neither candidate is action-class, so the
        // lexicographic rule picks INTENTION over POSSESSION.
        assert_eq!(m.map("want", PosTag::Verb, &ctx), Root::Intention);
        assert_eq!(m.map("want", PosTag::Noun, &ctx), Root::Possession);
    }

    #[test]
    fn ambiguous_develop_narrows_by_dobj() {
        let m = mapper();
        let with_obj = DepContext { relations: &[DepRel::Nsubj, DepRel::Dobj] };
        assert_eq!(m.map("develop", PosTag::Verb, &with_obj), Root::Creation);
        // Without an object both action candidates remain; CHANGE wins
        // lexicographically.
        let bare = DepContext { relations: &[DepRel::Nsubj] };
        assert_eq!(m.map("develop", PosTag::Verb, &bare), Root::Change);
    }

    #[test]
    fn spanish_profile_resolves_before_core() {
        let m = RootMapper::new(Language::Es.profile());
        let ctx = DepContext::default();
        assert_eq!(m.map("correr", PosTag::Verb, &ctx), Root::Motion);
        assert_eq!(m.map("dar", PosTag::Verb, &ctx), Root::Transfer);
    }

    #[test]
    fn synonym_groups_share_roots() {
        let m = mapper();
        let ctx = DepContext::default();
        for group in synonym_groups() {
            let first = m.map(group[0], PosTag::Verb, &ctx);
            for lemma in &group[1..] {
                assert_eq!(m.map(lemma, PosTag::Verb, &ctx), first, "group of {}", group[0]);
            }
        }
    }

    #[test]
    fn position_independence() {
        // Same lemma, same context: identical result on repeat calls.
        let m = mapper();
        let ctx = DepContext::default();
        let a = m.map("plan", PosTag::Verb, &ctx);
        let b = m.map("plan", PosTag::Verb, &ctx);
        assert_eq!(a, b);
    }
}
