//! Logical types: name-tagged primitive schemas with a richer value domain.
//!
//! Each logical type lives in its own module exposing `LOGICAL_NAME`,
//! `SCHEMA`, `builder()`, `from_logical()` and `to_logical()`.
//! [`LogicalType`] is the registry that dispatches on the reserved schema name.
//!
//! | Logical type | Encoded as | Rich value            |
//! |--------------|------------|-----------------------|
//! | Time         | `int32`    | [`chrono::NaiveTime`] |
//! | Date         | `int32`    | [`chrono::NaiveDate`] |
//! | Timestamp    | `int64`    | [`std::time::SystemTime`] |
//! | Decimal      | `bytes`    | [`bigdecimal::BigDecimal`] |
//!
//! `Decimal` schemas carry their scale as a parameter, so the registry's
//! [`LogicalType::schema`] and [`LogicalType::builder`] give the scale-0 form;
//! use [`decimal::schema`] for any other scale.

pub mod date;
pub mod decimal;
pub mod time;
pub mod timestamp;

use std::time::SystemTime;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};

use crate::{
    error::DataError,
    schema::{Schema, SchemaBuilder},
    value::Value,
};

/// Registered logical types, keyed by reserved schema name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Date,
    Time,
    Timestamp,
    Decimal,
}

/// Decoded value of a logical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalValue {
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(SystemTime),
    Decimal(BigDecimal),
}

impl LogicalType {
    pub const ALL: [LogicalType; 4] = [
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::Timestamp,
        LogicalType::Decimal,
    ];

    pub fn logical_name(&self) -> &'static str {
        match self {
            LogicalType::Date => date::LOGICAL_NAME,
            LogicalType::Time => time::LOGICAL_NAME,
            LogicalType::Timestamp => timestamp::LOGICAL_NAME,
            LogicalType::Decimal => decimal::LOGICAL_NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|logical| logical.logical_name() == name)
    }

    /// The logical type a schema is tagged with, if any.
    pub fn from_schema(schema: &Schema) -> Option<Self> {
        schema.name().and_then(Self::from_name)
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            LogicalType::Date => &date::SCHEMA,
            LogicalType::Time => &time::SCHEMA,
            LogicalType::Timestamp => &timestamp::SCHEMA,
            LogicalType::Decimal => &decimal::SCHEMA,
        }
    }

    pub fn builder(&self) -> SchemaBuilder {
        match self {
            LogicalType::Date => date::builder(),
            LogicalType::Time => time::builder(),
            LogicalType::Timestamp => timestamp::builder(),
            LogicalType::Decimal => decimal::builder(0),
        }
    }

    /// Encode a rich value into the primitive [`Value`] stored under `schema`.
    pub fn from_logical(&self, schema: &Schema, value: &LogicalValue) -> Result<Value, DataError> {
        match (self, value) {
            (LogicalType::Date, LogicalValue::Date(v)) => {
                date::from_logical(schema, *v).map(Value::I32)
            }
            (LogicalType::Time, LogicalValue::Time(v)) => {
                time::from_logical(schema, *v).map(Value::I32)
            }
            (LogicalType::Timestamp, LogicalValue::Timestamp(v)) => {
                timestamp::from_logical(schema, *v).map(Value::I64)
            }
            (LogicalType::Decimal, LogicalValue::Decimal(v)) => {
                decimal::from_logical(schema, v).map(Value::from)
            }
            _ => Err(DataError::invalid_value(format!(
                "{value:?} is not a {} value",
                self.label()
            ))),
        }
    }

    /// Decode the primitive [`Value`] stored under `schema` into a rich value.
    pub fn to_logical(&self, schema: &Schema, value: &Value) -> Result<LogicalValue, DataError> {
        match self {
            LogicalType::Date => {
                let days = required(value.try_i32()?, self)?;
                date::to_logical(schema, days).map(LogicalValue::Date)
            }
            LogicalType::Time => {
                let millis = required(value.try_i32()?, self)?;
                time::to_logical(schema, millis).map(LogicalValue::Time)
            }
            LogicalType::Timestamp => {
                let millis = required(value.try_i64()?, self)?;
                timestamp::to_logical(schema, millis).map(LogicalValue::Timestamp)
            }
            LogicalType::Decimal => {
                let unscaled = required(value.try_bytes()?, self)?;
                decimal::to_logical(schema, unscaled).map(LogicalValue::Decimal)
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LogicalType::Date => date::LABEL,
            LogicalType::Time => time::LABEL,
            LogicalType::Timestamp => timestamp::LABEL,
            LogicalType::Decimal => decimal::LABEL,
        }
    }
}

fn required<T>(value: Option<T>, logical: &LogicalType) -> Result<T, DataError> {
    value.ok_or_else(|| {
        DataError::invalid_value(format!("null cannot be converted to {}", logical.label()))
    })
}

pub(crate) fn check_schema(
    schema: &Schema,
    logical_name: &str,
    label: &'static str,
) -> Result<(), DataError> {
    if schema.name() == Some(logical_name) {
        Ok(())
    } else {
        Err(DataError::SchemaMismatch {
            logical: label,
            actual: schema.name().map(str::to_string),
        })
    }
}
