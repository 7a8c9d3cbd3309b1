use std::{
    cell::OnceCell,
    collections::HashMap,
    mem,
    time::SystemTime,
};

use chrono::{NaiveDate, NaiveTime};
use connect_data::{
    BOOLEAN_SCHEMA, BYTES_SCHEMA, BigDecimal, DataError, FLOAT32_SCHEMA, FLOAT64_SCHEMA,
    INT8_SCHEMA, INT16_SCHEMA, INT32_SCHEMA, INT64_SCHEMA, STRING_SCHEMA, Schema, SchemaAndValue,
    Struct, Value,
    logical::{date, decimal, time, timestamp},
};

use crate::header::Header;

/// Mutable, insertion-ordered collection of [`Header`]s for one record.
///
/// Duplicate keys are allowed. A key→positions index is built on the first
/// lookup by name and dropped by any mutation that shifts positions.
/// The collection is `Send` but not `Sync`; it performs no locking.
#[derive(Debug, Default)]
pub struct Headers {
    headers: Vec<Header>,
    index: OnceCell<HashMap<String, Vec<usize>>>,
}

/// Headers matching a name at the time of the lookup, in insertion order.
///
/// Later changes to the originating [`Headers`] are not reflected.
/// Iterate as many times as needed via [`HeaderSnapshot::iter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSnapshot {
    headers: Vec<Header>,
}

impl HeaderSnapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl IntoIterator for HeaderSnapshot {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderSnapshot {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    /// Every header named `key`, oldest first.
    pub fn all_with_name(&self, key: &str) -> HeaderSnapshot {
        let headers = self
            .positions(key)
            .iter()
            .map(|&pos| self.headers[pos].clone())
            .collect();
        HeaderSnapshot { headers }
    }

    /// The most recently added header named `key`.
    pub fn last_with_name(&self, key: &str) -> Option<&Header> {
        self.positions(key)
            .last()
            .map(|&pos| &self.headers[pos])
    }

    pub fn add(&mut self, header: Header) -> &mut Self {
        let pos = self.headers.len();
        if let Some(index) = self.index.get_mut() {
            index.entry(header.key().to_string()).or_default().push(pos);
        }
        self.headers.push(header);
        self
    }

    /// Add after checking that the value conforms to the schema; a null value
    /// needs an optional schema. Schemaless pairs are accepted as-is.
    pub fn add_schema_and_value(
        &mut self,
        key: &str,
        schema_and_value: SchemaAndValue,
    ) -> Result<&mut Self, DataError> {
        check_schema_matches(&schema_and_value)?;
        Ok(self.add(Header::new(key, schema_and_value)))
    }

    pub fn add_with_schema(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        schema: Schema,
    ) -> Result<&mut Self, DataError> {
        self.add_schema_and_value(key, SchemaAndValue::new(Some(schema), value.into()))
    }

    pub fn add_string(&mut self, key: &str, value: &str) -> &mut Self {
        self.add_unchecked(key, &STRING_SCHEMA, Value::string(value))
    }

    pub fn add_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.add_unchecked(key, &BOOLEAN_SCHEMA, Value::Bool(value))
    }

    pub fn add_i8(&mut self, key: &str, value: i8) -> &mut Self {
        self.add_unchecked(key, &INT8_SCHEMA, Value::I8(value))
    }

    pub fn add_i16(&mut self, key: &str, value: i16) -> &mut Self {
        self.add_unchecked(key, &INT16_SCHEMA, Value::I16(value))
    }

    pub fn add_i32(&mut self, key: &str, value: i32) -> &mut Self {
        self.add_unchecked(key, &INT32_SCHEMA, Value::I32(value))
    }

    pub fn add_i64(&mut self, key: &str, value: i64) -> &mut Self {
        self.add_unchecked(key, &INT64_SCHEMA, Value::I64(value))
    }

    pub fn add_f32(&mut self, key: &str, value: f32) -> &mut Self {
        self.add_unchecked(key, &FLOAT32_SCHEMA, Value::F32(value))
    }

    pub fn add_f64(&mut self, key: &str, value: f64) -> &mut Self {
        self.add_unchecked(key, &FLOAT64_SCHEMA, Value::F64(value))
    }

    pub fn add_bytes(&mut self, key: &str, value: &[u8]) -> &mut Self {
        self.add_unchecked(key, &BYTES_SCHEMA, Value::bytes(value))
    }

    /// `schema` is the array schema describing the whole list.
    pub fn add_list(
        &mut self,
        key: &str,
        values: Vec<Value>,
        schema: Schema,
    ) -> Result<&mut Self, DataError> {
        self.add_with_schema(key, Value::Array(values), schema)
    }

    /// `schema` is the map schema describing the whole mapping.
    pub fn add_map(
        &mut self,
        key: &str,
        entries: Vec<(Value, Value)>,
        schema: Schema,
    ) -> Result<&mut Self, DataError> {
        self.add_with_schema(key, Value::Map(entries), schema)
    }

    pub fn add_struct(&mut self, key: &str, value: Struct) -> Result<&mut Self, DataError> {
        value.validate()?;
        let schema = value.schema().clone();
        Ok(self.add(Header::new(
            key,
            SchemaAndValue::new(Some(schema), Value::Struct(value)),
        )))
    }

    pub fn add_time(&mut self, key: &str, value: NaiveTime) -> Result<&mut Self, DataError> {
        let millis = time::from_logical(&time::SCHEMA, value)?;
        Ok(self.add_unchecked(key, &time::SCHEMA, Value::I32(millis)))
    }

    pub fn add_date(&mut self, key: &str, value: NaiveDate) -> Result<&mut Self, DataError> {
        let days = date::from_logical(&date::SCHEMA, value)?;
        Ok(self.add_unchecked(key, &date::SCHEMA, Value::I32(days)))
    }

    pub fn add_timestamp(&mut self, key: &str, value: SystemTime) -> Result<&mut Self, DataError> {
        let millis = timestamp::from_logical(&timestamp::SCHEMA, value)?;
        Ok(self.add_unchecked(key, &timestamp::SCHEMA, Value::I64(millis)))
    }

    /// Stored under a `Decimal` schema whose scale is the value's own.
    pub fn add_decimal(&mut self, key: &str, value: &BigDecimal) -> Result<&mut Self, DataError> {
        let schema = decimal::schema_for(value)?;
        let unscaled = decimal::from_logical(&schema, value)?;
        Ok(self.add_unchecked(key, &schema, Value::from(unscaled)))
    }

    /// Drop every header named `key`.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.positions(key).is_empty() {
            return self;
        }
        self.headers.retain(|h| h.key() != key);
        self.invalidate();
        self
    }

    /// Keep only the most recent header named `key`, at its current position.
    pub fn retain_latest_with_name(&mut self, key: &str) -> &mut Self {
        let positions = self.positions(key);
        let Some((&latest, earlier)) = positions.split_last() else {
            return self;
        };
        if earlier.is_empty() {
            return self;
        }
        let headers = mem::take(&mut self.headers);
        self.headers = headers
            .into_iter()
            .enumerate()
            .filter(|(pos, h)| *pos == latest || h.key() != key)
            .map(|(_, h)| h)
            .collect();
        self.invalidate();
        self
    }

    /// Collapse to one header per key holding that key's most recent value.
    /// Survivors are ordered by the first appearance of their key.
    pub fn retain_latest(&mut self) -> &mut Self {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut survivors: Vec<Header> = Vec::with_capacity(self.headers.len());
        for header in mem::take(&mut self.headers) {
            if let Some(&slot) = slots.get(header.key()) {
                survivors[slot] = header;
            } else {
                slots.insert(header.key().to_string(), survivors.len());
                survivors.push(header);
            }
        }
        self.headers = survivors;
        self.invalidate();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.headers.clear();
        self.invalidate();
        self
    }

    /// An independent collection holding the same (shared, immutable) headers.
    pub fn duplicate(&self) -> Headers {
        Headers {
            headers: self.headers.clone(),
            index: OnceCell::new(),
        }
    }

    /// Replace every header, in order, with the transform's result; `None`
    /// removes the header.
    pub fn apply<F>(&mut self, transform: F) -> &mut Self
    where
        F: FnMut(Header) -> Option<Header>,
    {
        let headers = mem::take(&mut self.headers);
        self.headers = headers.into_iter().filter_map(transform).collect();
        self.invalidate();
        self
    }

    /// Like [`Headers::apply`], restricted to headers named `key`.
    pub fn apply_with_name<F>(&mut self, key: &str, mut transform: F) -> &mut Self
    where
        F: FnMut(Header) -> Option<Header>,
    {
        self.apply(|header| {
            if header.key() == key {
                transform(header)
            } else {
                Some(header)
            }
        })
    }

    fn add_unchecked(&mut self, key: &str, schema: &Schema, value: Value) -> &mut Self {
        self.add(Header::new(
            key,
            SchemaAndValue::new(Some(schema.clone()), value),
        ))
    }

    fn positions(&self, key: &str) -> &[usize] {
        self.index
            .get_or_init(|| {
                let mut index: HashMap<String, Vec<usize>> = HashMap::new();
                for (pos, header) in self.headers.iter().enumerate() {
                    index.entry(header.key().to_string()).or_default().push(pos);
                }
                index
            })
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn invalidate(&mut self) {
        self.index.take();
    }
}

fn check_schema_matches(schema_and_value: &SchemaAndValue) -> Result<(), DataError> {
    let Some(schema) = schema_and_value.schema() else {
        return Ok(());
    };
    schema.validate_value(schema_and_value.value())
}

impl Clone for Headers {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl PartialEq for Headers {
    fn eq(&self, other: &Self) -> bool {
        self.headers == other.headers
    }
}

impl Eq for Headers {}

impl FromIterator<Header> for Headers {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        Headers {
            headers: iter.into_iter().collect(),
            index: OnceCell::new(),
        }
    }
}

impl Extend<Header> for Headers {
    fn extend<I: IntoIterator<Item = Header>>(&mut self, iter: I) {
        for header in iter {
            self.add(header);
        }
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
