//! Error types for converter configuration.

/// Errors produced while configuring a converter.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `converter.type` named something other than key, value or header.
    #[error("unknown converter type '{value}' (expected key, value or header)")]
    UnknownConverterType { value: String },

    /// `converter.encoding` named a charset other than UTF-8.
    #[error("unsupported encoding '{encoding}' (only UTF-8 is supported)")]
    UnsupportedEncoding { encoding: String },
}

/// Errors produced by [`parse_text`](crate::parse_text).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text ended before an open array or map was closed.
    #[error("text ended before the enclosing array or map was closed")]
    Exhausted,

    /// The text opens an array or map but is not well formed.
    #[error("malformed text at offset {offset}: {detail}")]
    Malformed { offset: usize, detail: String },
}
