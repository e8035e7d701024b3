//! Verbose serializer: angle-bracket field tags.
//!
//! Grammar:
//! ```text
//! verbose   = root-tag [SP ops-tag] *(SP role-tag) [SP meta-tag]
//! root-tag  = "<ROOT=" symbol ">"
//! ops-tag   = "<OPS=" symbol *("|" symbol) ">"
//! role-tag  = "<" role-name "=" normalized-entity ">"
//! meta-tag  = "<META=" symbol ">"
//! ```
//! Absent OPS and absent META omit their fields entirely.

use crate::csc::Csc;

/// Serializes one CSC verbosely.
#[must_use]
pub fn serialize(csc: &Csc) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3 + csc.roles.len());

    parts.push(format!("<ROOT={}>", csc.root.as_str()));

    if !csc.ops.is_empty() {
        let ops: Vec<&str> = csc.ops.iter().map(|op| op.as_str()).collect();
        parts.push(format!("<OPS={}>", ops.join("|")));
    }

    for (role, entity) in &csc.roles {
        parts.push(format!("<{}={}>", role.as_str(), entity.normalized));
    }

    if let Some(meta) = csc.meta {
        parts.push(format!("<META={}>", meta.as_str()));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::entity::Entity;
    use crate::operator::Operator;
    use crate::role::Role;
    use crate::root::Root;

    #[test]
    fn minimal_csc_is_root_only() {
        let csc = Csc::fallback();
        assert_eq!(serialize(&csc), "<ROOT=EXISTENCE>");
    }

    #[test]
    fn ops_field_omitted_when_empty() {
        let mut roles = BTreeMap::new();
        roles.insert(Role::Theme, Entity::from_span("book"));
        let (csc, _) = Csc::assemble(Root::Existence, Vec::new(), roles, None);
        assert_eq!(serialize(&csc), "<ROOT=EXISTENCE> <THEME=BOOK>");
    }

    #[test]
    fn ops_preserve_stored_order() {
        let (a, _) = Csc::assemble(
            Root::Motion,
            vec![Operator::Future, Operator::Negation],
            BTreeMap::new(),
            None,
        );
        let (b, _) = Csc::assemble(
            Root::Motion,
            vec![Operator::Negation, Operator::Future],
            BTreeMap::new(),
            None,
        );
        assert_eq!(serialize(&a), "<ROOT=MOTION> <OPS=FUTURE|NEGATION>");
        assert_eq!(serialize(&b), "<ROOT=MOTION> <OPS=NEGATION|FUTURE>");
        assert_ne!(serialize(&a), serialize(&b));
    }
}
