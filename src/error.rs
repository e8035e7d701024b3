//! Error types for the PTIL encoder.
//!
//! All errors are strongly typed using thiserror. The taxonomy mirrors the
//! propagation policy of the encoder: validation errors surface to the
//! caller, analysis errors are construction-time only, and execution
//! errors belong to the optional runtime. Per-sentence faults never become
//! errors at all; they recover to documented fallbacks and are reported on
//! the diagnostics channel.

use thiserror::Error;

/// Validation errors for caller-supplied input.
///
/// These are the only errors the facade's `encode*` operations may
/// surface; everything else recovers internally.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Serialization format name not in {verbose, compact, ultra}.
    #[error("Unknown serialization format: '{name}'")]
    UnknownFormat {
        /// The rejected format name.
        name: String,
    },

    /// Training format type not in {standard, csc_only, mixed}.
    #[error("Unknown training format type: '{name}'")]
    UnknownFormatType {
        /// The rejected format-type name.
        name: String,
    },

    /// Training weight is negative or non-finite.
    #[error("Invalid training weight for '{field}': {value}")]
    InvalidWeight {
        /// Which weight field was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Input exceeds the configured length bound.
    #[error("Input exceeds maximum length of {max_len} bytes (got {actual})")]
    InputTooLong {
        /// Maximum accepted byte length.
        max_len: usize,
        /// Actual byte length.
        actual: usize,
    },
}

/// Analysis errors raised at encoder construction time.
///
/// Once an encoder is constructed these can no longer occur: the shallow
/// parser and every lexicon table are loaded exactly once.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No parser model is registered for the requested language.
    #[error("Unsupported language: '{code}' (supported: {supported})")]
    UnsupportedLanguage {
        /// The rejected language code.
        code: String,
        /// Comma-separated supported codes.
        supported: String,
    },

    /// A parser model is registered but could not be instantiated.
    #[error("Parser model '{model}' unavailable: {reason}")]
    ParserUnavailable {
        /// The configured model identifier.
        model: String,
        /// Why instantiation failed.
        reason: String,
    },
}

/// Execution errors raised by the bounded encoder runtime.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The runtime queue is full.
    #[error("Encoder queue is full (capacity={capacity})")]
    QueueFull {
        /// Queue capacity.
        capacity: usize,
    },

    /// The worker pool disconnected before producing a reply.
    #[error("Encoder worker pool disconnected")]
    Disconnected,

    /// The caller-supplied deadline elapsed.
    #[error("Encoding timed out after {duration_ms}ms")]
    Timeout {
        /// Duration before timeout.
        duration_ms: u64,
    },
}

/// Top-level error type for the PTIL encoder.
#[derive(Debug, Error)]
pub enum PtilError {
    /// Caller input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Construction-time analysis failure.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Runtime execution failure.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Internal invariant violation.
    #[error("Internal error: {message}")]
    Internal {
        /// Error description.
        message: String,
    },
}

impl PtilError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an analysis error.
    #[must_use]
    pub const fn is_analysis(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if retrying the same call could succeed.
    ///
    /// Validation and analysis failures are deterministic and never
    /// retryable; queue pressure and timeouts are.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Execution(ExecutionError::QueueFull { .. } | ExecutionError::Timeout { .. })
        )
    }
}

/// Result type alias for PTIL operations.
pub type PtilResult<T> = Result<T, PtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_mentions_name() {
        let err = ValidationError::UnknownFormat {
            name: "yaml".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("yaml"));
    }

    #[test]
    fn conversion_and_classification() {
        let err: PtilError = ValidationError::UnknownFormatType {
            name: "x".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert!(!err.is_retryable());

        let err: PtilError = ExecutionError::Timeout { duration_ms: 50 }.into();
        assert!(err.is_execution());
        assert!(err.is_retryable());

        let err: PtilError = AnalysisError::UnsupportedLanguage {
            code: "tlh".to_string(),
            supported: "en, es".to_string(),
        }
        .into();
        assert!(err.is_analysis());
        assert!(!err.is_retryable());
    }

    #[test]
    fn queue_full_is_retryable_disconnected_is_not() {
        let full: PtilError = ExecutionError::QueueFull { capacity: 4 }.into();
        assert!(full.is_retryable());
        let gone: PtilError = ExecutionError::Disconnected.into();
        assert!(!gone.is_retryable());
    }
}
