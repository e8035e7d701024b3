//! Ultra-compact serializer: single-character codes.
//!
//! Segments join with `|` in the shared emission order: root code, the
//! concatenated operator codes, one segment per role (role code plus the
//! compressed entity), and the META symbol. ASSERTIVE is the most common
//! META and is omitted entirely.
//!
//! Every table here is frozen data; changing any entry is a breaking
//! change to serialized corpora and must bump [`ULTRA_TABLE_VERSION`].

use crate::csc::Csc;
use crate::meta::Meta;
use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

/// Version of the frozen ultra-compact code tables.
pub const ULTRA_TABLE_VERSION: u32 = 1;

/// Single-character ROOT codes. EXISTENCE is the most common and takes
/// the shortest-to-type digit.
#[must_use]
pub const fn root_code(root: Root) -> char {
    match root {
        Root::Motion => '1',
        Root::Transfer => '2',
        Root::Communication => '3',
        Root::Cognition => '4',
        Root::Perception => '5',
        Root::Creation => '6',
        Root::Destruction => '7',
        Root::Change => '8',
        Root::Possession => '9',
        Root::Intention => 'A',
        Root::Existence => '0',
    }
}

/// Single-character operator codes.
#[must_use]
pub const fn operator_code(op: Operator) -> char {
    match op {
        Operator::Future => 'F',
        Operator::Past => 'P',
        Operator::Present => 'R',
        Operator::Negation => 'N',
        Operator::Affirmation => 'Y',
        Operator::Continuous => 'C',
        Operator::Completed => 'D',
        Operator::Habitual => 'H',
        Operator::Possible => 'M',
        Operator::Necessary => 'E',
        Operator::Obligatory => 'O',
        Operator::Permitted => 'T',
        Operator::Causative => 'U',
        Operator::SelfInitiated => 'S',
        Operator::Forced => 'G',
        Operator::DirectionIn => 'I',
        Operator::DirectionOut => 'J',
        Operator::Toward => 'W',
        Operator::Away => 'Z',
    }
}

/// Lowercase role codes.
#[must_use]
pub const fn role_code(role: Role) -> char {
    match role {
        Role::Agent => 'a',
        Role::Patient => 'p',
        Role::Theme => 't',
        Role::Goal => 'g',
        Role::Source => 's',
        Role::Instrument => 'i',
        Role::Location => 'l',
        Role::Time => 'm',
    }
}

/// META symbols; ASSERTIVE maps to nothing and is omitted.
#[must_use]
pub const fn meta_code(meta: Meta) -> Option<char> {
    match meta {
        Meta::Assertive => None,
        Meta::Question => Some('?'),
        Meta::Command => Some('!'),
        Meta::Uncertain => Some('~'),
        Meta::Evidential => Some('^'),
        Meta::Emotive => Some('*'),
        Meta::Ironic => Some('#'),
    }
}

/// Frozen entity-compression dictionary: common words shrink to one
/// letter, grammatical words vanish (their content lives in OPS/roles).
static ENTITY_DICT: &[(&str, &str)] = &[
    ("the", ""),
    ("a", ""),
    ("an", ""),
    ("this", ""),
    ("that", ""),
    ("boy", "b"),
    ("girl", "g"),
    ("man", "m"),
    ("woman", "w"),
    ("child", "c"),
    ("person", "p"),
    ("student", "s"),
    ("teacher", "t"),
    ("he", "h"),
    ("she", "s"),
    ("they", "t"),
    ("we", "w"),
    ("i", "i"),
    ("you", "u"),
    ("him", "h"),
    ("school", "s"),
    ("house", "h"),
    ("home", "h"),
    ("library", "l"),
    ("park", "p"),
    ("store", "s"),
    ("office", "o"),
    ("room", "r"),
    ("book", "b"),
    ("car", "c"),
    ("phone", "p"),
    ("computer", "c"),
    ("table", "t"),
    ("chair", "c"),
    ("door", "d"),
    ("window", "w"),
    ("mat", "m"),
    ("cat", "c"),
    ("dog", "d"),
    ("tomorrow", "T"),
    ("yesterday", "Y"),
    ("today", "D"),
    ("morning", "M"),
    ("evening", "E"),
    ("night", "N"),
    ("day", "D"),
    ("week", "W"),
    ("month", "M"),
    ("year", "Y"),
    ("work", "w"),
    ("project", "p"),
    ("task", "t"),
    ("meeting", "m"),
    ("class", "c"),
];

/// Compresses one normalized entity to at most two characters.
fn compress_entity(normalized: &str) -> String {
    let lower = normalized.to_lowercase();

    if let Some((_, code)) = ENTITY_DICT.iter().find(|(w, _)| *w == lower) {
        if !code.is_empty() {
            return (*code).to_string();
        }
    }

    let mut out = String::new();
    for word in lower.split('_') {
        match ENTITY_DICT.iter().find(|(w, _)| *w == word) {
            Some((_, code)) => out.push_str(code),
            None => {
                if let Some(c) = word.chars().next() {
                    if c.is_alphabetic() {
                        out.push(c);
                    }
                }
            }
        }
    }

    if out.is_empty() {
        if let Some(c) = lower.chars().next() {
            out.push(c);
        }
    }

    out.chars().take(2).collect()
}

/// Serializes one CSC ultra-compactly.
#[must_use]
pub fn serialize(csc: &Csc) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(3 + csc.roles.len());

    segments.push(root_code(csc.root).to_string());

    if !csc.ops.is_empty() {
        segments.push(csc.ops.iter().map(|&op| operator_code(op)).collect());
    }

    for (role, entity) in &csc.roles {
        let compressed = compress_entity(&entity.normalized);
        if !compressed.is_empty() {
            segments.push(format!("{}{compressed}", role_code(*role)));
        }
    }

    if let Some(symbol) = csc.meta.and_then(meta_code) {
        segments.push(symbol.to_string());
    }

    segments.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::entity::Entity;
    use crate::operator::Operator;

    #[test]
    fn codes_are_unique_per_table() {
        let mut roots = std::collections::BTreeSet::new();
        for root in Root::ALL {
            assert!(roots.insert(root_code(root)));
        }
        let mut ops = std::collections::BTreeSet::new();
        for op in Operator::ALL {
            assert!(ops.insert(operator_code(op)));
        }
        let mut roles = std::collections::BTreeSet::new();
        for role in Role::ALL {
            assert!(roles.insert(role_code(role)));
        }
    }

    #[test]
    fn canonical_ultra_vector() {
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
        assert_eq!(serialize(&csc), "1|FN|ab|gs|mT");
    }

    #[test]
    fn question_meta_symbol_survives() {
        let mut roles = BTreeMap::new();
        roles.insert(Role::Agent, Entity::from_span("cat"));
        let (csc, _) = Csc::assemble(
            Root::Existence,
            vec![Operator::Past],
            roles,
            Some(Meta::Question),
        );
        assert_eq!(serialize(&csc), "0|P|ac|?");
    }

    #[test]
    fn unknown_entity_compresses_to_first_letters() {
        assert_eq!(compress_entity("QUANTUM_PHYSICS"), "qp");
        assert_eq!(compress_entity("ZEBRA"), "z");
    }
}
