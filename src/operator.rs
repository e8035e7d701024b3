//! Semantic operators.
//!
//! Operators modify a ROOT with tense, aspect, polarity, modality,
//! causation, and direction. OPS is an *ordered* sequence: emission order
//! is determined by source position and is semantically significant, so
//! consumers must never reorder or deduplicate a stored sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a semantic operator.
///
/// Used for the fixed same-index emission priority in the OPS extractor;
/// categories never deduplicate against one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorCategory {
    /// PAST / PRESENT / FUTURE.
    Temporal,
    /// CONTINUOUS / COMPLETED / HABITUAL.
    Aspect,
    /// NEGATION / AFFIRMATION.
    Polarity,
    /// POSSIBLE / NECESSARY / OBLIGATORY / PERMITTED.
    Modality,
    /// CAUSATIVE / SELF_INITIATED / FORCED.
    Causation,
    /// DIRECTION_IN / DIRECTION_OUT / TOWARD / AWAY.
    Direction,
}

/// Ordered semantic operator modifying a ROOT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    /// Event located before utterance time.
    Past,
    /// Event located at utterance time.
    Present,
    /// Event located after utterance time.
    Future,
    /// Ongoing / progressive aspect.
    Continuous,
    /// Perfect / completed aspect.
    Completed,
    /// Habitual / recurring aspect.
    Habitual,
    /// Polarity reversal.
    Negation,
    /// Explicit affirmation. Reserved; no rule currently emits it.
    Affirmation,
    /// Epistemic or dynamic possibility.
    Possible,
    /// Necessity.
    Necessary,
    /// Obligation.
    Obligatory,
    /// Permission.
    Permitted,
    /// The event is caused by an external actor.
    Causative,
    /// The event is initiated by the agent itself.
    SelfInitiated,
    /// The event is compelled.
    Forced,
    /// Movement into an enclosure.
    DirectionIn,
    /// Movement out of an enclosure.
    DirectionOut,
    /// Movement toward a reference point.
    Toward,
    /// Movement away from a reference point.
    Away,
}

impl Operator {
    /// Every member of the closed operator set.
    pub const ALL: [Self; 19] = [
        Self::Past,
        Self::Present,
        Self::Future,
        Self::Continuous,
        Self::Completed,
        Self::Habitual,
        Self::Negation,
        Self::Affirmation,
        Self::Possible,
        Self::Necessary,
        Self::Obligatory,
        Self::Permitted,
        Self::Causative,
        Self::SelfInitiated,
        Self::Forced,
        Self::DirectionIn,
        Self::DirectionOut,
        Self::Toward,
        Self::Away,
    ];

    /// Uppercase ASCII symbol name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Past => "PAST",
            Self::Present => "PRESENT",
            Self::Future => "FUTURE",
            Self::Continuous => "CONTINUOUS",
            Self::Completed => "COMPLETED",
            Self::Habitual => "HABITUAL",
            Self::Negation => "NEGATION",
            Self::Affirmation => "AFFIRMATION",
            Self::Possible => "POSSIBLE",
            Self::Necessary => "NECESSARY",
            Self::Obligatory => "OBLIGATORY",
            Self::Permitted => "PERMITTED",
            Self::Causative => "CAUSATIVE",
            Self::SelfInitiated => "SELF_INITIATED",
            Self::Forced => "FORCED",
            Self::DirectionIn => "DIRECTION_IN",
            Self::DirectionOut => "DIRECTION_OUT",
            Self::Toward => "TOWARD",
            Self::Away => "AWAY",
        }
    }

    /// The category this operator belongs to.
    #[must_use]
    pub const fn category(self) -> OperatorCategory {
        match self {
            Self::Past | Self::Present | Self::Future => OperatorCategory::Temporal,
            Self::Continuous | Self::Completed | Self::Habitual => OperatorCategory::Aspect,
            Self::Negation | Self::Affirmation => OperatorCategory::Polarity,
            Self::Possible | Self::Necessary | Self::Obligatory | Self::Permitted => {
                OperatorCategory::Modality
            }
            Self::Causative | Self::SelfInitiated | Self::Forced => OperatorCategory::Causation,
            Self::DirectionIn | Self::DirectionOut | Self::Toward | Self::Away => {
                OperatorCategory::Direction
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_partition_sizes() {
        let count = |cat: OperatorCategory| {
            Operator::ALL.iter().filter(|o| o.category() == cat).count()
        };
        assert_eq!(count(OperatorCategory::Temporal), 3);
        assert_eq!(count(OperatorCategory::Aspect), 3);
        assert_eq!(count(OperatorCategory::Polarity), 2);
        assert_eq!(count(OperatorCategory::Modality), 4);
        assert_eq!(count(OperatorCategory::Causation), 3);
        assert_eq!(count(OperatorCategory::Direction), 4);
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in Operator::ALL.iter().enumerate() {
            for b in &Operator::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
