use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    sync::Arc,
};

use connect_data::{Schema, SchemaAndValue, Value};

/// Immutable key/value annotation. Cloning shares the same allocation.
#[derive(Debug, Clone)]
pub struct Header(Arc<HeaderInner>);

#[derive(Debug)]
struct HeaderInner {
    key: String,
    schema_and_value: SchemaAndValue,
}

impl Header {
    pub fn new(key: impl Into<String>, schema_and_value: SchemaAndValue) -> Self {
        Self(Arc::new(HeaderInner {
            key: key.into(),
            schema_and_value,
        }))
    }

    /// A header with neither schema nor value.
    pub fn null(key: impl Into<String>) -> Self {
        Self::new(key, SchemaAndValue::NULL)
    }

    pub fn key(&self) -> &str {
        &self.0.key
    }

    pub fn value(&self) -> &Value {
        self.0.schema_and_value.value()
    }

    /// The declared schema, or the struct's own schema for schemaless struct values.
    pub fn schema(&self) -> Option<&Schema> {
        match (self.0.schema_and_value.schema(), self.value()) {
            (Some(schema), _) => Some(schema),
            (None, Value::Struct(record)) => Some(record.schema()),
            (None, _) => None,
        }
    }

    pub fn schema_and_value(&self) -> &SchemaAndValue {
        &self.0.schema_and_value
    }

    /// Same schema and value under another key; renaming to the current key
    /// returns this very header.
    pub fn rename(&self, key: &str) -> Header {
        if self.key() == key {
            return self.clone();
        }
        Header::new(key, self.0.schema_and_value.clone())
    }

    /// Same key with a new schema and value.
    pub fn with(&self, schema: Option<Schema>, value: Value) -> Header {
        Header::new(self.key(), SchemaAndValue::new(schema, value))
    }

    /// True when both handles share one allocation.
    pub fn ptr_eq(a: &Header, b: &Header) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        Header::ptr_eq(self, other)
            || (self.key() == other.key()
                && self.schema() == other.schema()
                && self.value() == other.value())
    }
}

impl Eq for Header {}

impl Hash for Header {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.schema().hash(state);
        self.value().hash(state);
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}={}", self.key(), self.value())
    }
}
