//! CSC serialization (C7).
//!
//! Three formats share one emission order: ROOT, then OPS in stored
//! order, then roles in canonical role order, then META. The serializers
//! are pure functions over CSC values, selected by a closed [`Format`]
//! tag rather than an open registry.

mod compact;
mod ultra;
mod verbose;

pub use ultra::ULTRA_TABLE_VERSION;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::csc::Csc;
use crate::error::ValidationError;

/// Serialization format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `<ROOT=X> <OPS=A|B> <AGENT=Y> <META=Z>`.
    Verbose,
    /// `R:X O:A|B A:Y M:Z` with single-letter role prefixes.
    Compact,
    /// Single-character codes joined by `|`.
    Ultra,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Self; 3] = [Self::Verbose, Self::Compact, Self::Ultra];

    /// Lowercase format name as accepted at the service boundary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Compact => "compact",
            Self::Ultra => "ultra",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            "ultra" => Ok(Self::Ultra),
            other => Err(ValidationError::UnknownFormat { name: other.to_string() }),
        }
    }
}

/// Serializes one CSC in the chosen format.
#[must_use]
pub fn serialize(csc: &Csc, format: Format) -> String {
    match format {
        Format::Verbose => verbose::serialize(csc),
        Format::Compact => compact::serialize(csc),
        Format::Ultra => ultra::serialize(csc),
    }
}

/// Serializes a CSC list; the empty list yields the empty string.
#[must_use]
pub fn serialize_all(cscs: &[Csc], format: Format) -> String {
    if cscs.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = cscs.iter().map(|c| serialize(c, format)).collect();
    match format {
        Format::Verbose | Format::Ultra => parts.join(" "),
        Format::Compact => parts.join("; "),
    }
}

/// Charset contract for serialized output: printable ASCII plus Unicode
/// letters (entities preserve their letters). Control characters and
/// newlines are forbidden.
#[must_use]
pub fn charset_ok(serialized: &str) -> bool {
    serialized
        .chars()
        .all(|c| (' '..='~').contains(&c) || c.is_alphabetic())
}
