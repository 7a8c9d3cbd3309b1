use std::fmt::{Error, Result, Write as _};

use super::{Schema, SchemaType};

/// Format a schema in a readable style:
/// primitive schemas are rendered in one line, compound schemas are pretty-printed.
/// Nested schemas follow the same rule.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_body(schema, 0, &mut out)?;
    Ok(out)
}

fn format_body(schema: &Schema, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", schema.schema_type())?;
    writeln!(out, "{pad}optional: {}", schema.is_optional())?;
    if let Some(name) = schema.name() {
        writeln!(out, "{pad}name: {name}")?;
    }
    if let Some(version) = schema.version() {
        writeln!(out, "{pad}version: {version}")?;
    }
    if let Some(doc) = schema.doc() {
        writeln!(out, "{pad}doc: {doc}")?;
    }
    if let Some(default) = schema.default_value() {
        writeln!(out, "{pad}default: {default}")?;
    }
    if !schema.parameters().is_empty() {
        writeln!(out, "{pad}parameters:")?;
        for (key, value) in schema.parameters() {
            writeln!(out, "{pad}    {key}: {value}")?;
        }
    }

    match schema.schema_type() {
        SchemaType::Struct => {
            writeln!(out, "{pad}fields:")?;
            for field in schema.fields().map_err(|_| Error)? {
                format_labeled(field.name(), field.schema(), indent + 4, out)?;
            }
        }
        SchemaType::Array => {
            let item = schema.value_schema().map_err(|_| Error)?;
            format_labeled("item", item, indent, out)?;
        }
        SchemaType::Map => {
            let key = schema.key_schema().map_err(|_| Error)?;
            let value = schema.value_schema().map_err(|_| Error)?;
            format_labeled("key", key, indent, out)?;
            format_labeled("value", value, indent, out)?;
        }
        _ => {}
    }

    Ok(())
}

fn format_labeled(label: &str, schema: &Schema, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if is_one_liner(schema) {
        write!(
            out,
            "{pad}{label}: {{ type: {}, optional: {}",
            schema.schema_type(),
            schema.is_optional()
        )?;
        if let Some(name) = schema.name() {
            write!(out, ", name: {name}")?;
        }
        if let Some(version) = schema.version() {
            write!(out, ", version: {version}")?;
        }
        writeln!(out, " }}")?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_body(schema, indent + 4, out)?;
    }
    Ok(())
}

/// Primitives without doc, default or parameters fit on one line.
fn is_one_liner(schema: &Schema) -> bool {
    schema.schema_type().is_primitive()
        && schema.doc().is_none()
        && schema.default_value().is_none()
        && schema.parameters().is_empty()
}
