//! Projective dependency attachment over clause windows.
//!
//! Not a statistical parser: a deterministic attachment procedure. Each
//! token belongs to the clause of its nearest predicate (ties go left),
//! and within a clause a fixed rule order assigns every token exactly one
//! incoming arc. Predicates after the first attach to the first predicate
//! as coordinations, so the arc set forms a single tree.

use crate::analysis::{DepArc, DepRel, PosTag};
use crate::lexicon::{LanguageProfile, VerbMorph};

use super::tagger::Tagged;

/// Dependency build output.
#[derive(Debug, Clone, Default)]
pub struct DepBuild {
    /// The assembled arcs.
    pub arcs: Vec<DepArc>,
    /// Predicate token indices, in textual order.
    pub predicates: Vec<usize>,
    /// Predicates parsed as passive clauses.
    pub passive: Vec<usize>,
}

/// Builds dependency arcs for one sentence.
#[must_use]
pub fn build(tokens: &[String], tagged: &Tagged, profile: &LanguageProfile) -> DepBuild {
    let n = tokens.len();
    if n == 0 {
        return DepBuild::default();
    }

    let mut predicates: Vec<usize> =
        (0..n).filter(|&i| tagged.pos[i] == PosTag::Verb).collect();
    if predicates.is_empty() {
        // Copula-only sentences: promote the first auxiliary.
        if let Some(aux) = (0..n).find(|&i| tagged.pos[i] == PosTag::Aux) {
            predicates.push(aux);
        }
    }
    if predicates.is_empty() {
        return DepBuild::default();
    }

    // Clause assignment: nearest predicate by token distance, ties left.
    let clause_of: Vec<usize> = (0..n)
        .map(|i| {
            let mut best = predicates[0];
            let mut best_dist = usize::MAX;
            for &p in &predicates {
                let dist = p.abs_diff(i);
                if dist < best_dist {
                    best = p;
                    best_dist = dist;
                }
            }
            best
        })
        .collect();

    let mut arcs: Vec<DepArc> = Vec::new();
    let mut has_head = vec![false; n];

    let attach = |arcs: &mut Vec<DepArc>, has_head: &mut Vec<bool>, head: usize, rel: DepRel, dep: usize| {
        if dep != head && !has_head[dep] {
            arcs.push(DepArc { head, rel, dependent: dep });
            has_head[dep] = true;
        }
    };

    // Coordinated predicates hang off the first one.
    for &p in &predicates[1..] {
        attach(&mut arcs, &mut has_head, predicates[0], DepRel::Conj, p);
    }

    let mut passive = Vec::new();

    for &pred in &predicates {
        let members: Vec<usize> = (0..n).filter(|&i| clause_of[i] == pred && i != pred).collect();

        let clause_is_passive = tagged.morphs[pred] == Some(VerbMorph::Participle)
            && members.iter().any(|&i| {
                tagged.pos[i] == PosTag::Aux
                    && profile.passive_aux.contains(&tagged.lemmas[i].as_str())
            });
        if clause_is_passive {
            passive.push(pred);
        }

        // Function words and adposition objects first.
        for &i in &members {
            match tagged.pos[i] {
                PosTag::Punct => attach(&mut arcs, &mut has_head, pred, DepRel::Punct, i),
                PosTag::Aux => attach(&mut arcs, &mut has_head, pred, DepRel::Aux, i),
                PosTag::Part => {
                    let rel = if profile.is_negation(&tagged.lemmas[i]) {
                        DepRel::Neg
                    } else {
                        DepRel::Aux
                    };
                    attach(&mut arcs, &mut has_head, pred, rel, i);
                }
                PosTag::Cconj => attach(&mut arcs, &mut has_head, pred, DepRel::Cc, i),
                PosTag::Sconj | PosTag::Intj | PosTag::X => {
                    attach(&mut arcs, &mut has_head, pred, DepRel::Dep, i);
                }
                PosTag::Adv => attach(&mut arcs, &mut has_head, pred, DepRel::Advmod, i),
                PosTag::Adp => {
                    let rel = if clause_is_passive
                        && profile.agent_markers.contains(&tagged.lemmas[i].as_str())
                    {
                        DepRel::Agent
                    } else {
                        DepRel::Prep
                    };
                    attach(&mut arcs, &mut has_head, pred, rel, i);
                    if let Some(obj) = phrase_head_after(i, &members, tagged, profile) {
                        attach(&mut arcs, &mut has_head, i, DepRel::Pobj, obj);
                        // Pull the object's modifiers under it.
                        attach_np_modifiers(&mut arcs, &mut has_head, obj, &members, tagged);
                    }
                }
                _ => {}
            }
        }

        // Remaining determiners and adjectives lean on the next nominal.
        for &i in &members {
            if has_head[i] {
                continue;
            }
            match tagged.pos[i] {
                PosTag::Det | PosTag::Adj => {
                    let rel = if tagged.pos[i] == PosTag::Det { DepRel::Det } else { DepRel::Amod };
                    let target = members
                        .iter()
                        .copied()
                        .find(|&j| j > i && tagged.pos[j].is_nominal());
                    match target {
                        Some(j) => attach(&mut arcs, &mut has_head, j, rel, i),
                        None => attach(&mut arcs, &mut has_head, pred, DepRel::Dep, i),
                    }
                }
                _ => {}
            }
        }

        // Group leftover nominals into contiguous runs headed by the last
        // token of each run.
        let mut runs: Vec<usize> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        for &i in &members {
            if tagged.pos[i].is_nominal() && !has_head[i] {
                if let Some(&last) = current.last() {
                    if i != last + 1 {
                        runs.push(flush_run(&mut arcs, &mut has_head, &mut current));
                    }
                }
                current.push(i);
            }
        }
        if !current.is_empty() {
            runs.push(flush_run(&mut arcs, &mut has_head, &mut current));
        }

        // Subject: the run closest before the predicate.
        let subject = runs.iter().copied().filter(|&h| h < pred).max();
        if let Some(subj) = subject {
            let rel = if clause_is_passive { DepRel::NsubjPass } else { DepRel::Nsubj };
            attach(&mut arcs, &mut has_head, pred, rel, subj);
        }

        // Objects and bare temporal modifiers after the predicate.
        let mut post: Vec<usize> = Vec::new();
        for &h in &runs {
            if h <= pred || has_head[h] {
                continue;
            }
            if profile.is_temporal_noun(&tagged.lemmas[h]) {
                attach(&mut arcs, &mut has_head, pred, DepRel::Tmod, h);
            } else {
                post.push(h);
            }
        }
        match post.len() {
            0 => {}
            1 => attach(&mut arcs, &mut has_head, pred, DepRel::Dobj, post[0]),
            _ => {
                attach(&mut arcs, &mut has_head, pred, DepRel::Iobj, post[0]);
                attach(&mut arcs, &mut has_head, pred, DepRel::Dobj, post[1]);
                for &extra in &post[2..] {
                    attach(&mut arcs, &mut has_head, pred, DepRel::Dep, extra);
                }
            }
        }

        // Anything still floating attaches loosely to the predicate.
        for &i in &members {
            if !has_head[i] {
                attach(&mut arcs, &mut has_head, pred, DepRel::Dep, i);
            }
        }
    }

    DepBuild { arcs, predicates, passive }
}

/// Head of the noun phrase that starts after position `i`: skips
/// determiners, adjectives, and numerals, then takes the last token of the
/// contiguous nominal run. A bare temporal noun never extends the run; it
/// stays free to become a temporal modifier.
fn phrase_head_after(
    i: usize,
    members: &[usize],
    tagged: &Tagged,
    profile: &LanguageProfile,
) -> Option<usize> {
    let mut iter = members.iter().copied().filter(|&j| j > i).peekable();
    let mut head = None;
    while let Some(j) = iter.next() {
        match tagged.pos[j] {
            PosTag::Det | PosTag::Adj => continue,
            p if p.is_nominal() => {
                let mut last = j;
                while let Some(&k) = iter.peek() {
                    if k == last + 1
                        && tagged.pos[k].is_nominal()
                        && !profile.is_temporal_noun(&tagged.lemmas[k])
                    {
                        last = k;
                        iter.next();
                    } else {
                        break;
                    }
                }
                head = Some(last);
                break;
            }
            _ => break,
        }
    }
    head
}

/// Attaches determiners/adjectives immediately preceding `obj` to it.
fn attach_np_modifiers(
    arcs: &mut Vec<DepArc>,
    has_head: &mut Vec<bool>,
    obj: usize,
    members: &[usize],
    tagged: &Tagged,
) {
    let mut j = obj;
    while j > 0 {
        j -= 1;
        if !members.contains(&j) || has_head[j] {
            break;
        }
        match tagged.pos[j] {
            PosTag::Det => {
                arcs.push(DepArc { head: obj, rel: DepRel::Det, dependent: j });
                has_head[j] = true;
            }
            PosTag::Adj => {
                arcs.push(DepArc { head: obj, rel: DepRel::Amod, dependent: j });
                has_head[j] = true;
            }
            p if p.is_nominal() && !has_head[j] => {
                // Compound member of the same run.
                arcs.push(DepArc { head: obj, rel: DepRel::Dep, dependent: j });
                has_head[j] = true;
            }
            _ => break,
        }
    }
}

/// Closes a nominal run: earlier members attach to the final token, which
/// becomes the run head.
fn flush_run(arcs: &mut Vec<DepArc>, has_head: &mut Vec<bool>, run: &mut Vec<usize>) -> usize {
    let head = *run.last().expect("non-empty run");
    for &i in run.iter().take(run.len() - 1) {
        arcs.push(DepArc { head, rel: DepRel::Dep, dependent: i });
        has_head[i] = true;
    }
    run.clear();
    head
}
