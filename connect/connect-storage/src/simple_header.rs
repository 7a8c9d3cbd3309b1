use std::collections::HashMap;

use bytes::Bytes;
use connect_data::{
    BYTES_SCHEMA, DataError, STRING_SCHEMA, Schema, SchemaAndValue, Value, values,
};
use tracing::{debug, warn};

use crate::{
    config::{ConfigDef, ConverterConfig, ConverterType},
    converter::HeaderConverter,
    error::{ConfigError, ParseError},
    parser::parse_text,
};

/// Header converter that writes values as readable UTF-8 text and infers a
/// schema when reading them back.
///
/// Decoding never fails on text it cannot interpret: malformed input and
/// invalid UTF-8 are kept as raw bytes (with a warning). Only text that ends
/// inside an unclosed array or map is rejected.
#[derive(Debug, Clone, Default)]
pub struct SimpleHeaderConverter {
    config: ConverterConfig,
}

impl SimpleHeaderConverter {
    pub fn new() -> Self {
        Self::default()
    }

    fn raw(value: &[u8]) -> SchemaAndValue {
        SchemaAndValue::new(Some(BYTES_SCHEMA.clone()), Value::bytes(value))
    }
}

impl HeaderConverter for SimpleHeaderConverter {
    fn config(&self) -> ConfigDef {
        ConverterConfig::config_def()
    }

    fn configure(&mut self, settings: &HashMap<String, String>) -> Result<(), ConfigError> {
        self.config = ConverterConfig::for_type(settings, ConverterType::Header)?;
        debug!(encoding = self.config.encoding(), "configured simple header converter");
        Ok(())
    }

    fn from_connect_header(
        &self,
        _topic: &str,
        _header_key: &str,
        schema: Option<&Schema>,
        value: &Value,
    ) -> Result<Option<Bytes>, DataError> {
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(Bytes::from(values::convert_to_string(schema, value))))
    }

    fn to_connect_header(
        &self,
        topic: &str,
        header_key: &str,
        value: Option<&[u8]>,
    ) -> Result<SchemaAndValue, DataError> {
        let Some(bytes) = value else {
            return Ok(SchemaAndValue::NULL);
        };
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    topic,
                    header_key,
                    error = %e,
                    "header value is not valid UTF-8, using byte array"
                );
                return Ok(Self::raw(bytes));
            }
        };
        if text.is_empty() {
            return Ok(SchemaAndValue::new(
                Some(STRING_SCHEMA.clone()),
                Value::string(text),
            ));
        }
        match parse_text(text) {
            Ok(parsed) => Ok(parsed),
            Err(e @ ParseError::Exhausted) => Err(DataError::serialization(
                format!("failed to deserialize value for header '{header_key}' on topic '{topic}'"),
                e,
            )),
            Err(e) => {
                warn!(
                    topic,
                    header_key,
                    error = %e,
                    "failed to deserialize header value, using byte array"
                );
                Ok(Self::raw(bytes))
            }
        }
    }
}
