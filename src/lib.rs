//! # PTIL - Pre-Tokenization Intelligence Layer
//!
//! PTIL converts natural-language text into Compressed Semantic Code
//! (CSC): a deterministic, compact structured meaning representation,
//! serialized into tokenizer-friendly symbolic strings. It is a
//! structural compiler for meaning, not a semantic parser of truth
//! conditions: no reasoning, no world knowledge, no LLM calls.
//!
//! ## Core Concepts
//!
//! - **CSC**: one predicate's meaning as `(ROOT, OPS, ROLES, META)`
//! - **ROOT**: the semantic primitive anchoring a CSC; closed set
//! - **OPS**: ordered operator sequence (tense, aspect, polarity, ...)
//! - **ROLES**: role-to-entity bindings under a ROOT×ROLE matrix
//! - **META**: optional speech-act / epistemic tag
//!
//! ## Usage
//!
//! ```rust
//! use ptil::{Format, Language, PtilEncoder};
//!
//! let encoder = PtilEncoder::for_language(Language::En);
//! let serialized =
//!     encoder.encode_and_serialize("The boy will not go to school tomorrow.", Format::Verbose);
//! assert_eq!(
//!     serialized,
//!     "<ROOT=MOTION> <OPS=FUTURE|NEGATION> <AGENT=BOY> <GOAL=SCHOOL> <TIME=TOMORROW> <META=ASSERTIVE>"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod compat;
pub mod csc;
pub mod crosslingual;
pub mod efficiency;
pub mod encoder;
pub mod entity;
pub mod error;
pub mod lexicon;
pub mod meta;
pub mod operator;
pub mod ops;
pub mod parser;
pub mod role;
pub mod roles;
pub mod root;
pub mod root_map;
pub mod runtime;
pub mod serialize;
pub mod tokenizer;

pub use analysis::{Analysis, Aspect, DepArc, DepRel, PosTag, Tense};
pub use compat::{admissible_roles, is_role_compatible};
pub use csc::{from_json, to_json_pretty, Csc};
pub use encoder::{PtilEncoder, Recovery, TrainingConfig, TrainingFormat};
pub use entity::Entity;
pub use error::{AnalysisError, ExecutionError, PtilError, PtilResult, ValidationError};
pub use lexicon::Language;
pub use meta::Meta;
pub use operator::{Operator, OperatorCategory};
pub use role::{Role, CANONICAL_ROLE_ORDER};
pub use root::{Root, ROOT_SET_VERSION};
pub use runtime::{EncoderRuntime, RuntimeConfig};
pub use serialize::{charset_ok, serialize, serialize_all, Format, ULTRA_TABLE_VERSION};
pub use tokenizer::{CompatibilityReport, TokenizerKind};
