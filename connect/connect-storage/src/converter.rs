//! Converter traits used at the record boundary.

use std::collections::HashMap;

use bytes::Bytes;
use connect_data::{DataError, Schema, SchemaAndValue, Value};

use crate::{config::ConfigDef, error::ConfigError};

/// Translates record keys or values to and from opaque bytes.
///
/// Implementations are configured once through `&mut self` and then shared
/// read-only across threads for any number of records.
pub trait Converter: Send + Sync {
    /// Apply `settings`; `is_key` selects whether keys or values are converted.
    fn configure(
        &mut self,
        settings: &HashMap<String, String>,
        is_key: bool,
    ) -> Result<(), ConfigError>;

    /// Encode `value`. A null value may produce no bytes at all.
    fn from_connect_data(
        &self,
        topic: &str,
        schema: Option<&Schema>,
        value: &Value,
    ) -> Result<Option<Bytes>, DataError>;

    /// Decode bytes produced by [`Converter::from_connect_data`] or a
    /// compatible producer. Absent bytes decode to a null value.
    fn to_connect_data(&self, topic: &str, value: Option<&[u8]>)
    -> Result<SchemaAndValue, DataError>;
}

/// Translates individual header values to and from opaque bytes.
pub trait HeaderConverter: Send + Sync {
    /// The settings this converter understands.
    fn config(&self) -> ConfigDef;

    fn configure(&mut self, settings: &HashMap<String, String>) -> Result<(), ConfigError>;

    fn from_connect_header(
        &self,
        topic: &str,
        header_key: &str,
        schema: Option<&Schema>,
        value: &Value,
    ) -> Result<Option<Bytes>, DataError>;

    fn to_connect_header(
        &self,
        topic: &str,
        header_key: &str,
        value: Option<&[u8]>,
    ) -> Result<SchemaAndValue, DataError>;
}
