//! Errors surfaced by symbol decoding and encoding.
//!
//! Unknown keys on decode and unregistered mixins on encode are **not** errors; they never reach this type.

use thiserror::Error;

/// Errors that abort decoding or encoding of one symbol.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// The input bytes are not JSON, or the output could not be written.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("symbol must be a JSON object")]
    NotAnObject,

    /// A required core field is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A core field is present but has the wrong shape.
    #[error("malformed field `{field}`: {source}")]
    Structural {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A strict mixin rejected its payload, or its payload could not be written.
    #[error("malformed `{key}` mixin: {source}")]
    MixinPayload {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A held mixin value is not the type its descriptor encodes.
    #[error("mixin under `{key}` is not a `{expected}`")]
    MixinTypeMismatch { key: String, expected: &'static str },
}

impl SymbolError {
    /// Whether the error concerns a core field rather than a mixin.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SymbolError::NotAnObject | SymbolError::MissingField { .. } | SymbolError::Structural { .. }
        )
    }
}

/// Result type for symbol codec operations.
pub type SymbolResult<T> = Result<T, SymbolError>;
