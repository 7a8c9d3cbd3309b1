//! Text rendering and schema inference for dynamically typed values.
//!
//! [`convert_to_string`] produces the display form used by string-based
//! converters. Top-level strings are written verbatim; strings nested inside
//! arrays, maps and structs are quoted so that the output can be parsed back.
//! Bytes are rendered as standard base64, temporal logical types as ISO-8601
//! text and decimals as plain decimal text.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::DateTime;

use crate::{
    logical::{self, LogicalType},
    schema::{
        BOOLEAN_SCHEMA, BYTES_SCHEMA, FLOAT32_SCHEMA, FLOAT64_SCHEMA, INT8_SCHEMA, INT16_SCHEMA,
        INT32_SCHEMA, INT64_SCHEMA, STRING_SCHEMA, Schema, SchemaBuilder,
    },
    value::Value,
};

pub const TIME_FORMAT: &str = "%H:%M:%S%.3fZ";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Render `value` as text, using `schema` (when given) to recognize logical types.
pub fn convert_to_string(schema: Option<&Schema>, value: &Value) -> String {
    let mut out = String::new();
    append(&mut out, schema, value, false);
    out
}

fn append(out: &mut String, schema: Option<&Schema>, value: &Value, embedded: bool) {
    if let Some(text) = schema.and_then(|s| format_logical(s, value)) {
        if embedded {
            append_quoted(out, &text);
        } else {
            out.push_str(&text);
        }
        return;
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(v) => out.push_str(&v.to_string()),
        Value::I8(v) => out.push_str(&v.to_string()),
        Value::I16(v) => out.push_str(&v.to_string()),
        Value::I32(v) => out.push_str(&v.to_string()),
        Value::I64(v) => out.push_str(&v.to_string()),
        // Debug keeps the fraction ("2.0"), so floats never read back as integers.
        Value::F32(v) => out.push_str(&format!("{v:?}")),
        Value::F64(v) => out.push_str(&format!("{v:?}")),
        Value::String(s) if embedded => append_quoted(out, s),
        Value::String(s) => out.push_str(s),
        Value::Bytes(b) => out.push_str(&STANDARD.encode(b)),
        Value::Array(items) => {
            let element = schema.and_then(|s| s.value_schema().ok());
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                append(out, element, item, true);
            }
            out.push(']');
        }
        Value::Map(entries) => {
            let key_schema = schema.and_then(|s| s.key_schema().ok());
            let value_schema = schema.and_then(|s| s.value_schema().ok());
            out.push('{');
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                append(out, key_schema, k, true);
                out.push(':');
                append(out, value_schema, v, true);
            }
            out.push('}');
        }
        Value::Struct(record) => {
            out.push('{');
            for (i, (field, v)) in record.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                append_quoted(out, field.name());
                out.push(':');
                append(out, Some(field.schema()), v, true);
            }
            out.push('}');
        }
    }
}

fn append_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

fn format_logical(schema: &Schema, value: &Value) -> Option<String> {
    match (LogicalType::from_schema(schema)?, value) {
        (LogicalType::Time, Value::I32(v)) => logical::time::to_logical(schema, *v)
            .ok()
            .map(|t| t.format(TIME_FORMAT).to_string()),
        (LogicalType::Date, Value::I32(v)) => logical::date::to_logical(schema, *v)
            .ok()
            .map(|d| d.format(DATE_FORMAT).to_string()),
        (LogicalType::Timestamp, Value::I64(v)) => {
            DateTime::from_timestamp_millis(*v).map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        }
        (LogicalType::Decimal, Value::Bytes(v)) => logical::decimal::to_logical(schema, v)
            .ok()
            .map(|d| d.to_string()),
        _ => None,
    }
}

/// Best-effort schema for a schemaless value.
///
/// Arrays and maps get a schema only when they are non-empty and every element
/// (key, value) infers to the same schema. `Null` infers nothing.
pub fn infer_schema(value: &Value) -> Option<Schema> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some(BOOLEAN_SCHEMA.clone()),
        Value::I8(_) => Some(INT8_SCHEMA.clone()),
        Value::I16(_) => Some(INT16_SCHEMA.clone()),
        Value::I32(_) => Some(INT32_SCHEMA.clone()),
        Value::I64(_) => Some(INT64_SCHEMA.clone()),
        Value::F32(_) => Some(FLOAT32_SCHEMA.clone()),
        Value::F64(_) => Some(FLOAT64_SCHEMA.clone()),
        Value::String(_) => Some(STRING_SCHEMA.clone()),
        Value::Bytes(_) => Some(BYTES_SCHEMA.clone()),
        Value::Array(items) => {
            let element = common_schema(items.iter())?;
            SchemaBuilder::array(element).build().ok()
        }
        Value::Map(entries) => {
            let key = common_schema(entries.iter().map(|(k, _)| k))?;
            let value = common_schema(entries.iter().map(|(_, v)| v))?;
            SchemaBuilder::map(key, value).build().ok()
        }
        Value::Struct(record) => Some(record.schema().clone()),
    }
}

fn common_schema<'a>(mut values: impl Iterator<Item = &'a Value>) -> Option<Schema> {
    let first = infer_schema(values.next()?)?;
    for value in values {
        if infer_schema(value)? != first {
            return None;
        }
    }
    Some(first)
}
