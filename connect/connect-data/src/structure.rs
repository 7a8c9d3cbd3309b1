//! Record values for struct schemas.

use crate::{
    error::DataError,
    schema::{Field, Schema},
    value::Value,
};

/// One value per field of a struct [`Schema`], addressed by field name.
///
/// Unset fields hold [`Value::Null`]; reads fall back to the field's default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Struct {
    schema: Schema,
    values: Vec<Value>,
}

impl Struct {
    /// Fails with a schema-shape error unless `schema` is a struct schema.
    pub fn new(schema: Schema) -> Result<Self, DataError> {
        let len = schema.fields()?.len();
        Ok(Self {
            schema,
            values: vec![Value::Null; len],
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Field value, or the field's default when unset.
    pub fn get(&self, field_name: &str) -> Result<&Value, DataError> {
        let field = self.lookup(field_name)?;
        Ok(self.value_or_default(field))
    }

    /// Field value as stored, without applying defaults.
    pub fn get_without_default(&self, field_name: &str) -> Result<&Value, DataError> {
        let field = self.lookup(field_name)?;
        Ok(&self.values[field.index()])
    }

    /// Set a field after validating `value` against the field's schema.
    pub fn put(
        &mut self,
        field_name: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, DataError> {
        let value = value.into();
        let field = self
            .schema
            .field(field_name)?
            .ok_or_else(|| unknown_field(field_name))?;
        field.schema().validate_value(&value).map_err(|e| {
            DataError::invalid_value(format!("field '{field_name}': {e}"))
        })?;
        self.values[field.index()] = value;
        Ok(self)
    }

    /// Fields paired with their effective values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &Value)> {
        self.schema
            .fields()
            .unwrap_or_default()
            .iter()
            .map(|field| (field, self.value_or_default(field)))
    }

    /// Every field is set or defaulted and conforms to its schema.
    pub fn validate(&self) -> Result<(), DataError> {
        for field in self.schema.fields()? {
            field
                .schema()
                .validate_value(self.value_or_default(field))
                .map_err(|e| {
                    DataError::invalid_value(format!("field '{}': {e}", field.name()))
                })?;
        }
        Ok(())
    }

    fn lookup(&self, field_name: &str) -> Result<&Field, DataError> {
        self.schema
            .field(field_name)?
            .ok_or_else(|| unknown_field(field_name))
    }

    fn value_or_default<'a>(&'a self, field: &'a Field) -> &'a Value {
        let value = &self.values[field.index()];
        match (value, field.schema().default_value()) {
            (Value::Null, Some(default)) => default,
            _ => value,
        }
    }
}

fn unknown_field(field_name: &str) -> DataError {
    DataError::invalid_value(format!("'{field_name}' is not a valid field name"))
}
