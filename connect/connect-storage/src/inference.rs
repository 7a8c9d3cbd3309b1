//! Schema inference for parsed arrays and maps.
//!
//! Elements share a schema when they infer to the same one, or when they are
//! all integers or all floats (widened to the widest width seen; an `f32`
//! widens through its decimal text, so `0.1` stays `0.1`). Null elements make the shared schema optional. Anything else
//! leaves the container schemaless.

use std::collections::HashMap;

use connect_data::{
    FLOAT32_SCHEMA, FLOAT64_SCHEMA, INT8_SCHEMA, INT16_SCHEMA, INT32_SCHEMA, INT64_SCHEMA,
    Schema, SchemaAndValue, SchemaBuilder, SchemaType, Value, values,
};

const INTEGERS: [SchemaType; 4] = [
    SchemaType::Int8,
    SchemaType::Int16,
    SchemaType::Int32,
    SchemaType::Int64,
];
const FLOATS: [SchemaType; 2] = [SchemaType::Float32, SchemaType::Float64];

pub fn infer_parsed(value: Value) -> SchemaAndValue {
    let (schema, value) = infer(value);
    SchemaAndValue::new(schema, value)
}

fn infer(value: Value) -> (Option<Schema>, Value) {
    match value {
        Value::Array(items) => {
            let (element, items) = unify(items);
            let schema = element.and_then(|e| SchemaBuilder::array(e).build().ok());
            (schema, Value::Array(items))
        }
        Value::Map(entries) => {
            let (keys, vals): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
            let (key_schema, keys) = unify(keys);
            let (value_schema, vals) = unify(vals);
            let schema = match (key_schema, value_schema) {
                (Some(k), Some(v)) => SchemaBuilder::map(k, v).build().ok(),
                _ => None,
            };
            (schema, Value::Map(last_value_wins(keys.into_iter().zip(vals))))
        }
        other => (values::infer_schema(&other), other),
    }
}

/// A repeated key keeps its first position and its last value.
fn last_value_wins(entries: impl Iterator<Item = (Value, Value)>) -> Vec<(Value, Value)> {
    let mut slots: HashMap<Value, usize> = HashMap::new();
    let mut unique: Vec<(Value, Value)> = Vec::new();
    for (key, value) in entries {
        match slots.get(&key) {
            Some(&slot) => unique[slot].1 = value,
            None => {
                slots.insert(key.clone(), unique.len());
                unique.push((key, value));
            }
        }
    }
    unique
}

fn unify(items: Vec<Value>) -> (Option<Schema>, Vec<Value>) {
    let inferred: Vec<(Option<Schema>, Value)> = items.into_iter().map(infer).collect();
    let common = common_schema(&inferred);
    let items = inferred
        .into_iter()
        .map(|(_, v)| match &common {
            Some(schema) => widen(v, schema.schema_type()),
            None => v,
        })
        .collect();
    (common, items)
}

fn common_schema(inferred: &[(Option<Schema>, Value)]) -> Option<Schema> {
    let mut has_null = false;
    let mut common: Option<Schema> = None;
    for (schema, value) in inferred {
        if value.is_null() {
            has_null = true;
            continue;
        }
        let schema = schema.as_ref()?;
        common = Some(match common {
            None => schema.clone(),
            Some(current) => wider(&current, schema)?,
        });
    }
    let common = common?;
    if has_null {
        SchemaBuilder::from_schema(&common).optional().build().ok()
    } else {
        Some(common)
    }
}

fn wider(a: &Schema, b: &Schema) -> Option<Schema> {
    if a == b {
        return Some(a.clone());
    }
    if a.name().is_some() || b.name().is_some() {
        return None;
    }
    for family in [&INTEGERS[..], &FLOATS[..]] {
        let rank = |s: &Schema| family.iter().position(|t| *t == s.schema_type());
        if let (Some(ra), Some(rb)) = (rank(a), rank(b)) {
            return numeric_schema(family[ra.max(rb)]);
        }
    }
    None
}

fn numeric_schema(schema_type: SchemaType) -> Option<Schema> {
    let schema = match schema_type {
        SchemaType::Int8 => &INT8_SCHEMA,
        SchemaType::Int16 => &INT16_SCHEMA,
        SchemaType::Int32 => &INT32_SCHEMA,
        SchemaType::Int64 => &INT64_SCHEMA,
        SchemaType::Float32 => &FLOAT32_SCHEMA,
        SchemaType::Float64 => &FLOAT64_SCHEMA,
        _ => return None,
    };
    Some((**schema).clone())
}

fn widen(value: Value, target: SchemaType) -> Value {
    if let Value::F32(v) = value {
        return if target == SchemaType::Float64 {
            Value::F64(v.to_string().parse().unwrap_or(f64::from(v)))
        } else {
            value
        };
    }
    let Some(v) = integer(&value) else {
        return value;
    };
    match target {
        SchemaType::Int16 => i16::try_from(v).map_or(value, Value::I16),
        SchemaType::Int32 => i32::try_from(v).map_or(value, Value::I32),
        SchemaType::Int64 => Value::I64(v),
        _ => value,
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::I8(v) => Some(i64::from(*v)),
        Value::I16(v) => Some(i64::from(*v)),
        Value::I32(v) => Some(i64::from(*v)),
        Value::I64(v) => Some(*v),
        _ => None,
    }
}
