//! Semantic ROOT primitives.
//!
//! A ROOT is the anchor of a CSC: the event/state class of the predicate.
//! The set is closed and identical across every supported input language;
//! growing it is a versioned change, never a runtime mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version of the ROOT alphabet.
///
/// The primitive inventory may grow toward the 300–800 ceiling in future
/// versions; any addition bumps this constant so that serialized corpora
/// can be tied to the alphabet that produced them.
pub const ROOT_SET_VERSION: u32 = 1;

/// Semantic anchor representing the type of event or state.
///
/// Exactly one ROOT is carried by every valid CSC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Root {
    /// Translational movement of an agent or theme.
    Motion,
    /// Change of possession or custody between participants.
    Transfer,
    /// Production or exchange of linguistic content.
    Communication,
    /// Mental activity: thinking, knowing, remembering.
    Cognition,
    /// Sensory intake: seeing, hearing, feeling.
    Perception,
    /// Bringing an artifact into existence.
    Creation,
    /// Removing an artifact from existence or integrity.
    Destruction,
    /// Change of state or property.
    Change,
    /// Having, holding, needing.
    Possession,
    /// Directedness toward an outcome: intending, trying, hoping.
    Intention,
    /// Being, persisting, happening. Also the universal fallback.
    Existence,
}

impl Root {
    /// Every member of the closed ROOT set.
    pub const ALL: [Self; 11] = [
        Self::Motion,
        Self::Transfer,
        Self::Communication,
        Self::Cognition,
        Self::Perception,
        Self::Creation,
        Self::Destruction,
        Self::Change,
        Self::Possession,
        Self::Intention,
        Self::Existence,
    ];

    /// The fallback ROOT used when no predicate can be resolved.
    pub const FALLBACK: Self = Self::Existence;

    /// Uppercase ASCII symbol name, stable across serialization formats.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motion => "MOTION",
            Self::Transfer => "TRANSFER",
            Self::Communication => "COMMUNICATION",
            Self::Cognition => "COGNITION",
            Self::Perception => "PERCEPTION",
            Self::Creation => "CREATION",
            Self::Destruction => "DESTRUCTION",
            Self::Change => "CHANGE",
            Self::Possession => "POSSESSION",
            Self::Intention => "INTENTION",
            Self::Existence => "EXISTENCE",
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_uppercase_ascii() {
        for root in Root::ALL {
            let s = root.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{s}");
        }
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in Root::ALL.iter().enumerate() {
            for b in &Root::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn serde_uses_symbol_names() {
        let json = serde_json::to_string(&Root::Motion).unwrap();
        assert_eq!(json, "\"MOTION\"");
        let back: Root = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Root::Motion);
    }
}
