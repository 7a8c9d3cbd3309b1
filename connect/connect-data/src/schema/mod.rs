//! Immutable schema descriptors, their builder and the shared primitive singletons.

mod builder;
mod format;
mod primitives;
mod types;

pub use builder::SchemaBuilder;
pub use format::format_schema;
pub use primitives::{
    BOOLEAN_SCHEMA, BYTES_SCHEMA, FLOAT32_SCHEMA, FLOAT64_SCHEMA, INT8_SCHEMA, INT16_SCHEMA,
    INT32_SCHEMA, INT64_SCHEMA, OPTIONAL_BOOLEAN_SCHEMA, OPTIONAL_BYTES_SCHEMA,
    OPTIONAL_FLOAT32_SCHEMA, OPTIONAL_FLOAT64_SCHEMA, OPTIONAL_INT8_SCHEMA,
    OPTIONAL_INT16_SCHEMA, OPTIONAL_INT32_SCHEMA, OPTIONAL_INT64_SCHEMA,
    OPTIONAL_STRING_SCHEMA, STRING_SCHEMA,
};
pub use types::{Field, Schema, SchemaType};
pub(crate) use types::{SchemaInner, SchemaKind};
