use std::fmt;

use thiserror::Error;

/// Errors that stop processing of a statement file.
///
/// Malformed lines inside a statement never produce one of these; the
/// decoder degrades them locally (see [`FieldParseError`]).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Mt940Error {
    /// No candidate code page could decode the input.
    #[error("could not determine text encoding (tried: {tried})")]
    Decode {
        /// Comma-separated labels of the candidates that were attempted.
        tried: String,
    },

    /// An import handler rejected the decoded statement.
    #[error("statement handler '{handler}' failed: {message}")]
    Handler {
        /// Name reported by the handler.
        handler: String,
        /// Handler-supplied failure description.
        message: String,
    },
}

/// A single statement field that could not be parsed.
///
/// Produced by the field primitives in [`crate::core`] and always recovered
/// by the decoders: an absent value, a sentinel, or an inline note in the
/// transaction reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError {
    /// Which field was being parsed (e.g. "value_date", "amount").
    pub field: &'static str,
    /// The raw input value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl FieldParseError {
    pub(crate) fn new(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': {}", self.field, self.value, self.reason)
    }
}

impl std::error::Error for FieldParseError {}
