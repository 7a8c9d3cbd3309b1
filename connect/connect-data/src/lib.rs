//! Self-describing typed data for connector records.
//!
//! This crate provides the immutable [`Schema`] model (built with
//! [`SchemaBuilder`]), dynamically typed [`Value`]s and [`Struct`] records,
//! the [`SchemaAndValue`] pair used at untyped boundaries, and the
//! [`logical`] types layered on primitive encodings.

mod error;
pub mod logical;
mod schema;
mod schema_and_value;
mod structure;
mod value;
pub mod values;

pub use error::{DataError, ValueTypeError};
pub use logical::{LogicalType, LogicalValue, decimal::BigDecimal};
pub use schema::{
    BOOLEAN_SCHEMA, BYTES_SCHEMA, FLOAT32_SCHEMA, FLOAT64_SCHEMA, Field, INT8_SCHEMA,
    INT16_SCHEMA, INT32_SCHEMA, INT64_SCHEMA, OPTIONAL_BOOLEAN_SCHEMA, OPTIONAL_BYTES_SCHEMA,
    OPTIONAL_FLOAT32_SCHEMA, OPTIONAL_FLOAT64_SCHEMA, OPTIONAL_INT8_SCHEMA,
    OPTIONAL_INT16_SCHEMA, OPTIONAL_INT32_SCHEMA, OPTIONAL_INT64_SCHEMA,
    OPTIONAL_STRING_SCHEMA, STRING_SCHEMA, Schema, SchemaBuilder, SchemaType, format_schema,
};
pub use schema_and_value::SchemaAndValue;
pub use structure::Struct;
pub use value::Value;
