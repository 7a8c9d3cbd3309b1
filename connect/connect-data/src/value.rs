//! Dynamically typed values that conform to a [`Schema`](crate::Schema).

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{DefaultHasher, Hash, Hasher},
    mem,
    sync::Arc,
};

use crate::{error::ValueTypeError, structure::Struct, values};

/// A value paired with a schema at runtime.
///
/// Floats compare and hash by bit pattern, so `Value` is `Eq` and `Hash`
/// (`NaN == NaN`, `0.0 != -0.0`). Map entries keep insertion order, but two
/// maps holding the same entries compare and hash equal regardless of order.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Struct(Struct),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn try_i8(&self) -> Result<Option<i8>, ValueTypeError> {
        match self {
            Value::I8(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I8")),
        }
    }

    pub fn try_i16(&self) -> Result<Option<i16>, ValueTypeError> {
        match self {
            Value::I16(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I16")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_f32(&self) -> Result<Option<f32>, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_array(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::Array(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Array")),
        }
    }

    pub fn try_map(&self) -> Result<Option<&[(Value, Value)]>, ValueTypeError> {
        match self {
            Value::Map(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Map")),
        }
    }

    pub fn try_struct(&self) -> Result<Option<&Struct>, ValueTypeError> {
        match self {
            Value::Struct(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Struct")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
            Value::Struct(_) => "Struct",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => same_entries(a, b),
            (Value::Struct(a), Value::Struct(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(v) => v.hash(state),
            Value::I8(v) => v.hash(state),
            Value::I16(v) => v.hash(state),
            Value::I32(v) => v.hash(state),
            Value::I64(v) => v.hash(state),
            Value::F32(v) => v.to_bits().hash(state),
            Value::F64(v) => v.to_bits().hash(state),
            Value::String(v) => v.hash(state),
            Value::Bytes(v) => v.hash(state),
            Value::Array(v) => v.hash(state),
            Value::Map(v) => {
                v.len().hash(state);
                v.iter()
                    .map(entry_hash)
                    .fold(0u64, u64::wrapping_add)
                    .hash(state);
            }
            Value::Struct(v) => v.hash(state),
        }
    }
}

fn same_entries(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut unmatched: Vec<&(Value, Value)> = b.iter().collect();
    a.iter().all(|entry| {
        match unmatched.iter().position(|candidate| *candidate == entry) {
            Some(pos) => {
                unmatched.swap_remove(pos);
                true
            }
            None => false,
        }
    })
}

fn entry_hash(entry: &(Value, Value)) -> u64 {
    let mut hasher = DefaultHasher::new();
    entry.hash(&mut hasher);
    hasher.finish()
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&values::convert_to_string(None, self))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::I8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Arc::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Arc::from(v))
    }
}

impl From<Struct> for Value {
    fn from(v: Struct) -> Self {
        Value::Struct(v)
    }
}
