//! ROOT×ROLE compatibility matrix.
//!
//! A total function from ROOT to its admissible roles. The matrix is
//! constant data, fixed at compile time; hot-reloading it would invalidate
//! the determinism guarantee and is deliberately impossible.
//!
//! EXISTENCE admits AGENT here so that stative predicates with animate
//! subjects ("the cat sleeps") keep their subject through binding.

use crate::role::Role;
use crate::root::Root;

/// Returns the admissible roles for a ROOT, in canonical role order.
#[must_use]
pub const fn admissible_roles(root: Root) -> &'static [Role] {
    match root {
        Root::Motion => &[
            Role::Agent,
            Role::Theme,
            Role::Goal,
            Role::Source,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Transfer => &[
            Role::Agent,
            Role::Theme,
            Role::Goal,
            Role::Source,
            Role::Instrument,
            Role::Time,
        ],
        Root::Communication => &[
            Role::Agent,
            Role::Patient,
            Role::Theme,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Cognition => &[Role::Agent, Role::Theme, Role::Instrument, Role::Time],
        Root::Perception => &[
            Role::Agent,
            Role::Theme,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Creation => &[
            Role::Agent,
            Role::Theme,
            Role::Source,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Destruction => &[
            Role::Agent,
            Role::Theme,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Change => &[
            Role::Agent,
            Role::Theme,
            Role::Goal,
            Role::Source,
            Role::Instrument,
            Role::Location,
            Role::Time,
        ],
        Root::Possession => &[
            Role::Agent,
            Role::Theme,
            Role::Source,
            Role::Location,
            Role::Time,
        ],
        Root::Intention => &[Role::Agent, Role::Theme, Role::Goal, Role::Time],
        Root::Existence => &[Role::Agent, Role::Theme, Role::Location, Role::Time],
    }
}

/// True if `role` is admissible under `root`.
#[must_use]
pub fn is_role_compatible(root: Root, role: Role) -> bool {
    admissible_roles(root).contains(&role)
}
