use std::{
    collections::{BTreeMap, HashSet},
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{error::DataError, value::Value};

/// Closed set of schema kinds.
///
/// Variant names mirror [`Value`] for consistency (values ↔ types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    Bytes,
    Array,
    Map,
    Struct,
}

impl SchemaType {
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            SchemaType::Array | SchemaType::Map | SchemaType::Struct
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaType::Int8 => "int8",
            SchemaType::Int16 => "int16",
            SchemaType::Int32 => "int32",
            SchemaType::Int64 => "int64",
            SchemaType::Float32 => "float32",
            SchemaType::Float64 => "float64",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Bytes => "bytes",
            SchemaType::Array => "array",
            SchemaType::Map => "map",
            SchemaType::Struct => "struct",
        }
    }
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.type_name())
    }
}

/// Kind discriminant plus the payload only that kind may carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum SchemaKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    Bytes,
    Array { value: Schema },
    Map { key: Schema, value: Schema },
    Struct { fields: Vec<Field> },
}

impl SchemaKind {
    /// Payload-free kind for a primitive type; `None` for containers.
    pub(crate) fn primitive(schema_type: SchemaType) -> Option<Self> {
        Some(match schema_type {
            SchemaType::Int8 => SchemaKind::Int8,
            SchemaType::Int16 => SchemaKind::Int16,
            SchemaType::Int32 => SchemaKind::Int32,
            SchemaType::Int64 => SchemaKind::Int64,
            SchemaType::Float32 => SchemaKind::Float32,
            SchemaType::Float64 => SchemaKind::Float64,
            SchemaType::Boolean => SchemaKind::Boolean,
            SchemaType::String => SchemaKind::String,
            SchemaType::Bytes => SchemaKind::Bytes,
            SchemaType::Array | SchemaType::Map | SchemaType::Struct => return None,
        })
    }

    fn schema_type(&self) -> SchemaType {
        match self {
            SchemaKind::Int8 => SchemaType::Int8,
            SchemaKind::Int16 => SchemaType::Int16,
            SchemaKind::Int32 => SchemaType::Int32,
            SchemaKind::Int64 => SchemaType::Int64,
            SchemaKind::Float32 => SchemaType::Float32,
            SchemaKind::Float64 => SchemaType::Float64,
            SchemaKind::Boolean => SchemaType::Boolean,
            SchemaKind::String => SchemaType::String,
            SchemaKind::Bytes => SchemaType::Bytes,
            SchemaKind::Array { .. } => SchemaType::Array,
            SchemaKind::Map { .. } => SchemaType::Map,
            SchemaKind::Struct { .. } => SchemaType::Struct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SchemaInner {
    pub(crate) kind: SchemaKind,
    pub(crate) optional: bool,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: Option<String>,
    pub(crate) version: Option<i32>,
    pub(crate) doc: Option<String>,
    pub(crate) parameters: BTreeMap<String, String>,
}

/// Immutable shape descriptor shared by reference counting.
///
/// Equality and hashing are structural over every attribute, including nested
/// key/value schemas and struct fields. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Schema(Arc<SchemaInner>);

impl Schema {
    pub(crate) fn from_inner(inner: SchemaInner) -> Self {
        Self(Arc::new(inner))
    }

    /// A primitive schema with no name, version, doc, parameters or default.
    pub(crate) fn primitive(kind: SchemaKind, optional: bool) -> Self {
        Self::from_inner(SchemaInner {
            kind,
            optional,
            default_value: None,
            name: None,
            version: None,
            doc: None,
            parameters: BTreeMap::new(),
        })
    }

    /// A required primitive schema tagged with a logical-type name.
    pub(crate) fn named_primitive(kind: SchemaKind, name: &str, version: i32) -> Self {
        Self::from_inner(SchemaInner {
            kind,
            optional: false,
            default_value: None,
            name: Some(name.to_string()),
            version: Some(version),
            doc: None,
            parameters: BTreeMap::new(),
        })
    }

    pub(crate) fn with_parameter(self, key: &str, value: impl Into<String>) -> Self {
        let mut inner = (*self.0).clone();
        inner.parameters.insert(key.to_string(), value.into());
        Self::from_inner(inner)
    }

    pub(crate) fn inner(&self) -> &SchemaInner {
        &self.0
    }

    pub(crate) fn into_inner(self) -> SchemaInner {
        Arc::unwrap_or_clone(self.0)
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(a: &Schema, b: &Schema) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn schema_type(&self) -> SchemaType {
        self.0.kind.schema_type()
    }

    pub fn is_optional(&self) -> bool {
        self.0.optional
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.0.default_value.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn version(&self) -> Option<i32> {
        self.0.version
    }

    pub fn doc(&self) -> Option<&str> {
        self.0.doc.as_deref()
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.0.parameters
    }

    /// Key schema of a map.
    pub fn key_schema(&self) -> Result<&Schema, DataError> {
        match &self.0.kind {
            SchemaKind::Map { key, .. } => Ok(key),
            _ => Err(self.shape_error("look up the key schema")),
        }
    }

    /// Element schema of an array, or value schema of a map.
    pub fn value_schema(&self) -> Result<&Schema, DataError> {
        match &self.0.kind {
            SchemaKind::Array { value } | SchemaKind::Map { value, .. } => Ok(value),
            _ => Err(self.shape_error("look up the value schema")),
        }
    }

    /// Struct fields in declaration order; `fields()[i].index() == i`.
    pub fn fields(&self) -> Result<&[Field], DataError> {
        match &self.0.kind {
            SchemaKind::Struct { fields } => Ok(fields),
            _ => Err(self.shape_error("look up fields")),
        }
    }

    /// Struct field by name, `Ok(None)` if the struct has no such field.
    pub fn field(&self, field_name: &str) -> Result<Option<&Field>, DataError> {
        Ok(self.fields()?.iter().find(|f| f.name() == field_name))
    }

    /// Recursively check that `value` conforms to this schema.
    pub fn validate_value(&self, value: &Value) -> Result<(), DataError> {
        match (&self.0.kind, value) {
            (_, Value::Null) => {
                if self.is_optional() {
                    Ok(())
                } else {
                    Err(DataError::invalid_value(format!(
                        "null used for required {} schema",
                        self.schema_type()
                    )))
                }
            }
            (SchemaKind::Int8, Value::I8(_))
            | (SchemaKind::Int16, Value::I16(_))
            | (SchemaKind::Int32, Value::I32(_))
            | (SchemaKind::Int64, Value::I64(_))
            | (SchemaKind::Float32, Value::F32(_))
            | (SchemaKind::Float64, Value::F64(_))
            | (SchemaKind::Boolean, Value::Bool(_))
            | (SchemaKind::String, Value::String(_))
            | (SchemaKind::Bytes, Value::Bytes(_)) => Ok(()),
            (SchemaKind::Array { value: element }, Value::Array(items)) => items
                .iter()
                .try_for_each(|item| element.validate_value(item)),
            (SchemaKind::Map { key, value: val }, Value::Map(entries)) => {
                let mut seen = HashSet::with_capacity(entries.len());
                entries.iter().try_for_each(|(k, v)| {
                    key.validate_value(k)?;
                    if !seen.insert(k) {
                        return Err(DataError::invalid_value(format!(
                            "duplicate map key {k}"
                        )));
                    }
                    val.validate_value(v)
                })
            }
            (SchemaKind::Struct { .. }, Value::Struct(record)) => {
                if record.schema() != self {
                    return Err(DataError::invalid_value("struct schemas do not match"));
                }
                record.validate()
            }
            _ => Err(DataError::invalid_value(format!(
                "{} value is not valid for {} schema",
                value.variant_name(),
                self.schema_type()
            ))),
        }
    }

    fn shape_error(&self, operation: &'static str) -> DataError {
        DataError::SchemaShape {
            operation,
            schema_type: self.schema_type(),
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        Schema::ptr_eq(self, other) || self.0 == other.0
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}

/// A named, positioned member of a struct schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    index: usize,
    schema: Schema,
}

impl Field {
    pub fn new(name: impl Into<String>, index: usize, schema: Schema) -> Self {
        Self {
            name: name.into(),
            index,
            schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
