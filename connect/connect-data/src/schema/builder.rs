use std::collections::{BTreeMap, HashSet};

use super::{Field, Schema, SchemaInner, SchemaKind, SchemaType};
use crate::{error::DataError, value::Value};

/// Fluent builder producing immutable [`Schema`] values.
///
/// Setters never fail; every consistency rule is checked once by
/// [`SchemaBuilder::build`].
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema_type: SchemaType,
    key_schema: Option<Schema>,
    value_schema: Option<Schema>,
    fields: Vec<(String, Schema)>,
    optional: bool,
    default_value: Option<Value>,
    name: Option<String>,
    version: Option<i32>,
    doc: Option<String>,
    parameters: BTreeMap<String, String>,
}

impl SchemaBuilder {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            key_schema: None,
            value_schema: None,
            fields: Vec::new(),
            optional: false,
            default_value: None,
            name: None,
            version: None,
            doc: None,
            parameters: BTreeMap::new(),
        }
    }

    pub fn int8() -> Self {
        Self::new(SchemaType::Int8)
    }

    pub fn int16() -> Self {
        Self::new(SchemaType::Int16)
    }

    pub fn int32() -> Self {
        Self::new(SchemaType::Int32)
    }

    pub fn int64() -> Self {
        Self::new(SchemaType::Int64)
    }

    pub fn float32() -> Self {
        Self::new(SchemaType::Float32)
    }

    pub fn float64() -> Self {
        Self::new(SchemaType::Float64)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn bytes() -> Self {
        Self::new(SchemaType::Bytes)
    }

    pub fn array(value_schema: Schema) -> Self {
        Self {
            value_schema: Some(value_schema),
            ..Self::new(SchemaType::Array)
        }
    }

    pub fn map(key_schema: Schema, value_schema: Schema) -> Self {
        Self {
            key_schema: Some(key_schema),
            value_schema: Some(value_schema),
            ..Self::new(SchemaType::Map)
        }
    }

    pub fn structure() -> Self {
        Self::new(SchemaType::Struct)
    }

    /// Start from every attribute of an existing schema, e.g. to derive its
    /// optional counterpart.
    pub fn from_schema(schema: &Schema) -> Self {
        let inner = schema.inner();
        let mut builder = Self::new(schema.schema_type());
        match &inner.kind {
            SchemaKind::Array { value } => builder.value_schema = Some(value.clone()),
            SchemaKind::Map { key, value } => {
                builder.key_schema = Some(key.clone());
                builder.value_schema = Some(value.clone());
            }
            SchemaKind::Struct { fields } => {
                builder.fields = fields
                    .iter()
                    .map(|f| (f.name().to_string(), f.schema().clone()))
                    .collect();
            }
            _ => {}
        }
        builder.optional = inner.optional;
        builder.default_value = inner.default_value.clone();
        builder.name = inner.name.clone();
        builder.version = inner.version;
        builder.doc = inner.doc.clone();
        builder.parameters = inner.parameters.clone();
        builder
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn parameters<K, V>(mut self, parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Declare a default; a [`Value::Null`] default is the same as none.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.default_value = (!value.is_null()).then_some(value);
        self
    }

    /// Append a struct field; its index is its position among added fields.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    pub fn build(self) -> Result<Schema, DataError> {
        if !self.fields.is_empty() && self.schema_type != SchemaType::Struct {
            return Err(DataError::invalid_schema(format!(
                "fields cannot be added to a {} schema",
                self.schema_type
            )));
        }

        let kind = match self.schema_type {
            SchemaType::Array => SchemaKind::Array {
                value: self.value_schema.ok_or_else(|| {
                    DataError::invalid_schema("array schema requires a value schema")
                })?,
            },
            SchemaType::Map => match (self.key_schema, self.value_schema) {
                (Some(key), Some(value)) => SchemaKind::Map { key, value },
                _ => {
                    return Err(DataError::invalid_schema(
                        "map schema requires key and value schemas",
                    ));
                }
            },
            SchemaType::Struct => SchemaKind::Struct {
                fields: index_fields(self.fields)?,
            },
            primitive => SchemaKind::primitive(primitive).ok_or_else(|| {
                DataError::invalid_schema(format!("{primitive} is not a primitive type"))
            })?,
        };

        let schema = Schema::from_inner(SchemaInner {
            kind,
            optional: self.optional,
            default_value: None,
            name: self.name,
            version: self.version,
            doc: self.doc,
            parameters: self.parameters,
        });

        let Some(default_value) = self.default_value else {
            return Ok(schema);
        };
        schema
            .validate_value(&default_value)
            .map_err(|e| DataError::invalid_schema(format!("invalid default value: {e}")))?;

        let mut inner = schema.into_inner();
        inner.default_value = Some(default_value);
        Ok(Schema::from_inner(inner))
    }
}

fn index_fields(fields: Vec<(String, Schema)>) -> Result<Vec<Field>, DataError> {
    let mut seen = HashSet::with_capacity(fields.len());
    fields
        .into_iter()
        .enumerate()
        .map(|(index, (name, schema))| {
            if !seen.insert(name.clone()) {
                return Err(DataError::invalid_schema(format!(
                    "duplicate field name '{name}'"
                )));
            }
            Ok(Field::new(name, index, schema))
        })
        .collect()
}
