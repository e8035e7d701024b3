//! Role binding (C4).
//!
//! Maps the predicate's syntactic arguments onto semantic roles under the
//! ROOT's admissibility constraints. Deterministic throughout: candidates
//! compete by source position and the leftmost wins.

use std::collections::BTreeMap;

use crate::analysis::{Analysis, DepRel, PosTag};
use crate::compat::is_role_compatible;
use crate::entity::Entity;
use crate::lexicon::LanguageProfile;
use crate::role::Role;
use crate::root::Root;

/// Binds argument spans to semantic roles.
#[derive(Debug, Clone, Copy)]
pub struct RolesBinder {
    profile: &'static LanguageProfile,
}

impl RolesBinder {
    /// Creates a binder over the given language profile.
    #[must_use]
    pub const fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// Binds roles for the predicate at `pred` under `root`.
    ///
    /// Every returned role is admissible under `root` and appears exactly
    /// once; when candidates compete for a role, the one whose head token
    /// sits leftmost wins. No AGENT is invented for imperatives.
    #[must_use]
    pub fn bind(&self, analysis: &Analysis, pred: usize, root: Root) -> BTreeMap<Role, Entity> {
        let mut candidates: Vec<(Role, usize)> = Vec::new();

        for arc in analysis.children_of(pred) {
            match arc.rel {
                DepRel::Nsubj => candidates.push((Role::Agent, arc.dependent)),
                DepRel::NsubjPass => {
                    let role = if matches!(root, Root::Motion | Root::Transfer) {
                        Role::Theme
                    } else {
                        Role::Patient
                    };
                    candidates.push((role, arc.dependent));
                }
                DepRel::Dobj => {
                    let role = if is_role_compatible(root, Role::Patient) {
                        Role::Patient
                    } else {
                        Role::Theme
                    };
                    candidates.push((role, arc.dependent));
                }
                DepRel::Iobj => candidates.push((Role::Goal, arc.dependent)),
                DepRel::Tmod => candidates.push((Role::Time, arc.dependent)),
                DepRel::Agent => {
                    if let Some(obj) = analysis.child_with(arc.dependent, DepRel::Pobj) {
                        candidates.push((Role::Agent, obj));
                    }
                }
                DepRel::Prep => {
                    if let Some((role, obj)) = self.prep_candidate(analysis, arc.dependent) {
                        candidates.push((role, obj));
                    }
                }
                _ => {}
            }
        }

        // Admissibility filter, then leftmost-wins per role.
        let mut bound: BTreeMap<Role, usize> = BTreeMap::new();
        for (role, head) in candidates {
            if !is_role_compatible(root, role) {
                continue;
            }
            bound
                .entry(role)
                .and_modify(|existing| {
                    if head < *existing {
                        *existing = head;
                    }
                })
                .or_insert(head);
        }

        bound
            .into_iter()
            .map(|(role, head)| (role, self.entity_for(analysis, head)))
            .filter(|(_, entity)| !entity.is_empty())
            .collect()
    }

    /// Role for a prepositional complement. The preposition lemma selects
    /// the default role; a temporal object upgrades a locative reading to
    /// TIME.
    fn prep_candidate(&self, analysis: &Analysis, prep: usize) -> Option<(Role, usize)> {
        let obj = analysis.child_with(prep, DepRel::Pobj)?;
        let prep_lower = analysis.tokens[prep].to_lowercase();
        let mut role = self.profile.preposition_role(&prep_lower)?;

        if role == Role::Location && self.profile.is_temporal_noun(&analysis.lemmas[obj]) {
            role = Role::Time;
        }
        Some((role, obj))
    }

    /// Builds the entity for an argument head: the head plus its
    /// adjectival and compound dependents, in token order. Determiners
    /// stay out of the span.
    fn entity_for(&self, analysis: &Analysis, head: usize) -> Entity {
        let mut indices: Vec<usize> = analysis
            .children_of(head)
            .filter(|arc| matches!(arc.rel, DepRel::Amod | DepRel::Dep))
            .map(|arc| arc.dependent)
            .filter(|&i| analysis.pos[i] == PosTag::Adj || analysis.pos[i].is_nominal())
            .collect();
        indices.push(head);
        indices.sort_unstable();
        indices.dedup();

        let words: Vec<&str> = indices.iter().map(|&i| analysis.tokens[i].as_str()).collect();
        Entity::from_span(&words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;
    use crate::parser::{RuleParser, ShallowParser};

    fn bind_en(text: &str, root: Root) -> BTreeMap<Role, Entity> {
        let parser = RuleParser::new(Language::En);
        let analysis = parser.analyze(text);
        let pred = analysis
            .pos
            .iter()
            .position(|&p| p == PosTag::Verb)
            .or_else(|| analysis.pos.iter().position(|&p| p == PosTag::Aux))
            .expect("predicate");
        RolesBinder::new(Language::En.profile()).bind(&analysis, pred, root)
    }

    fn norm(roles: &BTreeMap<Role, Entity>, role: Role) -> Option<&str> {
        roles.get(&role).map(|e| e.normalized.as_str())
    }

    #[test]
    fn canonical_motion_roles() {
        let roles = bind_en("The boy will not go to school tomorrow.", Root::Motion);
        assert_eq!(norm(&roles, Role::Agent), Some("BOY"));
        assert_eq!(norm(&roles, Role::Goal), Some("SCHOOL"));
        assert_eq!(norm(&roles, Role::Time), Some("TOMORROW"));
        assert_eq!(roles.len(), 3);
    }

    #[test]
    fn ditransitive_transfer() {
        let roles = bind_en("She gave him a book.", Root::Transfer);
        assert_eq!(norm(&roles, Role::Agent), Some("SHE"));
        assert_eq!(norm(&roles, Role::Goal), Some("HIM"));
        // TRANSFER does not admit PATIENT, so the direct object lands on
        // THEME.
        assert_eq!(norm(&roles, Role::Theme), Some("BOOK"));
    }

    #[test]
    fn imperative_binds_no_agent() {
        let roles = bind_en("Run!", Root::Motion);
        assert!(roles.is_empty());
    }

    #[test]
    fn passive_subject_is_theme_for_motion() {
        let roles = bind_en("The book was thrown by the boy.", Root::Motion);
        assert_eq!(norm(&roles, Role::Theme), Some("BOOK"));
        assert_eq!(norm(&roles, Role::Agent), Some("BOY"));
    }

    #[test]
    fn instrument_preposition() {
        let roles = bind_en("She cut the bread with a knife.", Root::Destruction);
        assert_eq!(norm(&roles, Role::Agent), Some("SHE"));
        assert_eq!(norm(&roles, Role::Theme), Some("BREAD"));
        assert_eq!(norm(&roles, Role::Instrument), Some("KNIFE"));
    }

    #[test]
    fn locative_upgrades_to_time_for_temporal_object() {
        let roles = bind_en("She slept in the morning.", Root::Existence);
        assert_eq!(norm(&roles, Role::Time), Some("MORNING"));
        assert!(!roles.contains_key(&Role::Location));
    }

    #[test]
    fn incompatible_roles_are_filtered() {
        // COGNITION admits no LOCATION; the locative phrase drops.
        let roles = bind_en("She thinks in the park.", Root::Cognition);
        assert_eq!(norm(&roles, Role::Agent), Some("SHE"));
        assert!(!roles.contains_key(&Role::Location));
    }

    #[test]
    fn leftmost_candidate_wins_role_competition() {
        // Two goal prepositions; the earlier object wins.
        let roles = bind_en("He went to school to town.", Root::Motion);
        assert_eq!(norm(&roles, Role::Goal), Some("SCHOOL"));
    }

    #[test]
    fn adjectives_join_the_entity_span() {
        let roles = bind_en("The little boy ran.", Root::Motion);
        assert_eq!(norm(&roles, Role::Agent), Some("LITTLE_BOY"));
    }
}
