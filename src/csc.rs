//! Compressed Semantic Code records (C6).
//!
//! A CSC owns its operator list and its entities; records are immutable
//! after assembly and carry no references back into parser state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::compat::is_role_compatible;
use crate::entity::Entity;
use crate::error::PtilError;
use crate::meta::Meta;
use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

/// One predicate's meaning: `(root, ops, roles, meta)`.
///
/// `roles` is keyed by [`Role`], whose ordering is the canonical emission
/// order, so iteration is already serialization-ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Csc {
    /// Mandatory semantic anchor.
    pub root: Root,
    /// Ordered operator sequence; possibly empty, never reordered.
    pub ops: Vec<Operator>,
    /// Role bindings; each role at most once, all admissible under `root`.
    pub roles: BTreeMap<Role, Entity>,
    /// Optional speech-act / epistemic tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Csc {
    /// Assembles a validated CSC.
    ///
    /// ROOT is mandatory by construction (the type carries it). Roles
    /// that are not admissible under `root` are dropped and returned to
    /// the caller; dropping is a recovery, not a failure. Operators are
    /// members of their closed set by construction.
    #[must_use]
    pub fn assemble(
        root: Root,
        ops: Vec<Operator>,
        roles: BTreeMap<Role, Entity>,
        meta: Option<Meta>,
    ) -> (Self, Vec<Role>) {
        let mut kept = BTreeMap::new();
        let mut dropped = Vec::new();
        for (role, entity) in roles {
            if is_role_compatible(root, role) {
                kept.insert(role, entity);
            } else {
                dropped.push(role);
            }
        }
        (Self { root, ops, roles: kept, meta }, dropped)
    }

    /// A minimal fallback CSC: the fallback ROOT, nothing else.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            root: Root::FALLBACK,
            ops: Vec::new(),
            roles: BTreeMap::new(),
            meta: None,
        }
    }

    /// True if every carried role is admissible under the ROOT.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.roles.keys().all(|&r| is_role_compatible(self.root, r))
    }
}

/// Serializes a CSC list to pretty JSON (transport, logging, replay).
pub fn to_json_pretty(cscs: &[Csc]) -> Result<String, PtilError> {
    serde_json::to_string_pretty(cscs)
        .map_err(|e| PtilError::internal(format!("serialize CSC list: {e}")))
}

/// Deserializes a CSC list from JSON.
pub fn from_json(s: &str) -> Result<Vec<Csc>, PtilError> {
    serde_json::from_str::<Vec<Csc>>(s)
        .map_err(|e| PtilError::internal(format!("deserialize CSC list: {e}")))
}
