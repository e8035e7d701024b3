//! Compact serializer: single-letter field prefixes.
//!
//! Layout: `R:<root> O:<op>|<op> <role-prefix>:<entity> ... M:<meta>`.
//! Role prefixes are A P T G S I L W; W carries TIME so that neither
//! THEME's T nor the META field prefix M collides with it.

use crate::csc::Csc;
use crate::role::Role;

/// Fixed single-letter prefix per role.
#[must_use]
pub const fn role_prefix(role: Role) -> char {
    match role {
        Role::Agent => 'A',
        Role::Patient => 'P',
        Role::Theme => 'T',
        Role::Goal => 'G',
        Role::Source => 'S',
        Role::Instrument => 'I',
        Role::Location => 'L',
        Role::Time => 'W',
    }
}

/// Serializes one CSC compactly.
#[must_use]
pub fn serialize(csc: &Csc) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3 + csc.roles.len());

    parts.push(format!("R:{}", csc.root.as_str()));

    if !csc.ops.is_empty() {
        let ops: Vec<&str> = csc.ops.iter().map(|op| op.as_str()).collect();
        parts.push(format!("O:{}", ops.join("|")));
    }

    for (role, entity) in &csc.roles {
        parts.push(format!("{}:{}", role_prefix(*role), entity.normalized));
    }

    if let Some(meta) = csc.meta {
        parts.push(format!("M:{}", meta.as_str()));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::entity::Entity;
    use crate::meta::Meta;
    use crate::operator::Operator;
    use crate::root::Root;

    #[test]
    fn prefixes_are_unique_and_time_avoids_theme() {
        let mut seen = std::collections::BTreeSet::new();
        for role in Role::ALL {
            assert!(seen.insert(role_prefix(role)), "duplicate prefix");
        }
        assert_ne!(role_prefix(Role::Time), role_prefix(Role::Theme));
        // META's field prefix M stays free.
        assert!(!seen.contains(&'M'));
    }

    #[test]
    fn canonical_compact_layout() {
        let mut roles = BTreeMap::new();
        roles.insert(Role::Agent, Entity::from_span("boy"));
        roles.insert(Role::Goal, Entity::from_span("school"));
        roles.insert(Role::Time, Entity::from_span("tomorrow"));
        let (csc, _) = Csc::assemble(
            Root::Motion,
            vec![Operator::Future, Operator::Negation],
            roles,
            Some(Meta::Assertive),
        );
        assert_eq!(
            serialize(&csc),
            "R:MOTION O:FUTURE|NEGATION A:BOY G:SCHOOL W:TOMORROW M:ASSERTIVE"
        );
    }

    #[test]
    fn ops_omitted_when_empty() {
        let (csc, _) = Csc::assemble(Root::Existence, Vec::new(), BTreeMap::new(), None);
        assert_eq!(serialize(&csc), "R:EXISTENCE");
    }
}
