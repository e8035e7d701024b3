//! Golden output vectors for the frozen ultra-compact table.
//!
//! These strings are the reference serialization of ten sample CSCs. Any
//! diff here means the frozen code tables changed, which is a breaking
//! change to serialized corpora.

use std::collections::BTreeMap;

use ptil::{Csc, Entity, Format, Meta, Operator, Role, Root, ULTRA_TABLE_VERSION};

fn csc(
    root: Root,
    ops: &[Operator],
    roles: &[(Role, &str)],
    meta: Option<Meta>,
) -> Csc {
    let mut map = BTreeMap::new();
    for (role, span) in roles {
        map.insert(*role, Entity::from_span(span));
    }
    let (csc, dropped) = Csc::assemble(root, ops.to_vec(), map, meta);
    assert!(dropped.is_empty(), "golden CSC carries incompatible roles");
    csc
}

fn golden() -> Vec<(Csc, &'static str)> {
    vec![
        (
            csc(
                Root::Motion,
                &[Operator::Future, Operator::Negation],
                &[(Role::Agent, "boy"), (Role::Goal, "school"), (Role::Time, "tomorrow")],
                Some(Meta::Assertive),
            ),
            "1|FN|ab|gs|mT",
        ),
        (
            csc(
                Root::Existence,
                &[Operator::Past],
                &[(Role::Agent, "cat")],
                Some(Meta::Question),
            ),
            "0|P|ac|?",
        ),
        (
            csc(
                Root::Transfer,
                &[Operator::Past],
                &[(Role::Agent, "she"), (Role::Theme, "book"), (Role::Goal, "him")],
                Some(Meta::Assertive),
            ),
            "2|P|as|tb|gh",
        ),
        (
            csc(Root::Motion, &[Operator::Present], &[], Some(Meta::Command)),
            "1|R|!",
        ),
        (
            csc(
                Root::Cognition,
                &[Operator::Present],
                &[(Role::Agent, "i")],
                Some(Meta::Uncertain),
            ),
            "4|R|ai|~",
        ),
        (
            csc(
                Root::Creation,
                &[Operator::Present],
                &[(Role::Agent, "woman")],
                Some(Meta::Assertive),
            ),
            "6|R|aw",
        ),
        (
            csc(
                Root::Destruction,
                &[Operator::Past],
                &[(Role::Agent, "she"), (Role::Theme, "bread"), (Role::Instrument, "knife")],
                Some(Meta::Assertive),
            ),
            "7|P|as|tb|ik",
        ),
        (
            csc(
                Root::Possession,
                &[Operator::Present],
                &[(Role::Agent, "he"), (Role::Theme, "car")],
                Some(Meta::Assertive),
            ),
            "9|R|ah|tc",
        ),
        (
            csc(
                Root::Communication,
                &[Operator::Past],
                &[(Role::Agent, "they")],
                Some(Meta::Evidential),
            ),
            "3|P|at|^",
        ),
        (
            csc(
                Root::Change,
                &[Operator::Future],
                &[(Role::Theme, "garden")],
                Some(Meta::Assertive),
            ),
            "8|F|tg",
        ),
    ]
}

#[test]
fn ultra_golden_vectors() {
    assert_eq!(ULTRA_TABLE_VERSION, 1);
    for (i, (csc, expected)) in golden().iter().enumerate() {
        let actual = ptil::serialize(csc, Format::Ultra);
        assert_eq!(&actual, expected, "golden vector {i} drifted");
    }
}

#[test]
fn golden_vectors_round_trip_the_charset_contract() {
    for (csc, _) in golden() {
        for format in Format::ALL {
            assert!(ptil::charset_ok(&ptil::serialize(&csc, format)));
        }
    }
}

#[test]
fn verbose_and_compact_goldens_for_the_canonical_csc() {
    let (canonical, _) = &golden()[0];
    assert_eq!(
        ptil::serialize(canonical, Format::Verbose),
        "<ROOT=MOTION> <OPS=FUTURE|NEGATION> <AGENT=BOY> <GOAL=SCHOOL> <TIME=TOMORROW> <META=ASSERTIVE>"
    );
    assert_eq!(
        ptil::serialize(canonical, Format::Compact),
        "R:MOTION O:FUTURE|NEGATION A:BOY G:SCHOOL W:TOMORROW M:ASSERTIVE"
    );
}
