//! Error types for the schema/value layer.

use crate::schema::SchemaType;

/// Error returned by schema accessors, value validation and logical-type codecs.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// An accessor was invoked on a schema whose kind does not support it
    /// (e.g. `fields()` on a map schema).
    #[error("cannot {operation} on schema of type {schema_type}")]
    SchemaShape {
        operation: &'static str,
        schema_type: SchemaType,
    },

    /// A logical-type conversion was given a schema that is not tagged with
    /// the logical type's reserved name.
    #[error("requested {logical} conversion but the schema name is {actual:?}")]
    SchemaMismatch {
        logical: &'static str,
        actual: Option<String>,
    },

    /// A logical value lies outside its codec's legal domain.
    #[error("{logical} value out of range: {detail}")]
    OutOfRange {
        logical: &'static str,
        detail: String,
    },

    /// A value does not conform to the schema it is paired with.
    #[error("invalid value: {detail}")]
    InvalidValue { detail: String },

    /// A schema builder was asked to produce an inconsistent schema.
    #[error("invalid schema: {detail}")]
    InvalidSchema { detail: String },

    /// A typed accessor was used on a value of another variant.
    #[error(transparent)]
    ValueType(#[from] ValueTypeError),

    /// Encoding to or decoding from opaque bytes failed at a converter boundary.
    #[error("serialization failed: {detail}")]
    Serialization {
        detail: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DataError {
    pub(crate) fn invalid_value(detail: impl Into<String>) -> Self {
        Self::InvalidValue {
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_schema(detail: impl Into<String>) -> Self {
        Self::InvalidSchema {
            detail: detail.into(),
        }
    }

    /// Wrap a converter-boundary failure together with its cause.
    pub fn serialization(
        detail: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Serialization {
            detail: detail.into(),
            source: Some(source.into()),
        }
    }
}

/// Raised by the typed accessors on [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
