use crate::{schema::Schema, value::Value};

/// A schema (or none) together with a value (or null), used at boundaries
/// where static typing is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaAndValue {
    schema: Option<Schema>,
    value: Value,
}

impl SchemaAndValue {
    /// Neither a schema nor a value.
    pub const NULL: SchemaAndValue = SchemaAndValue {
        schema: None,
        value: Value::Null,
    };

    pub fn new(schema: Option<Schema>, value: Value) -> Self {
        Self { schema, value }
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_null(&self) -> bool {
        self.schema.is_none() && self.value.is_null()
    }

    pub fn into_parts(self) -> (Option<Schema>, Value) {
        (self.schema, self.value)
    }
}

impl Default for SchemaAndValue {
    fn default() -> Self {
        Self::NULL
    }
}
