use std::collections::HashMap;

use bytes::Bytes;
use connect_data::{DataError, OPTIONAL_STRING_SCHEMA, Schema, SchemaAndValue, Value};
use tracing::debug;

use crate::{
    config::{ConfigDef, ConverterConfig, ConverterType},
    converter::{Converter, HeaderConverter},
    error::ConfigError,
};

/// Converts every value to its display string and decodes bytes as an
/// optional string. The schema is ignored on encode.
#[derive(Debug, Clone, Default)]
pub struct StringConverter {
    config: ConverterConfig,
}

impl StringConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn converter_config(&self) -> &ConverterConfig {
        &self.config
    }

    fn apply(&mut self, config: ConverterConfig) {
        debug!(
            converter_type = %config.converter_type(),
            encoding = config.encoding(),
            "configured string converter"
        );
        self.config = config;
    }

    fn encode(value: &Value) -> Option<Bytes> {
        if value.is_null() {
            return None;
        }
        Some(Bytes::from(value.to_string()))
    }

    fn decode(value: Option<&[u8]>) -> Result<SchemaAndValue, DataError> {
        let value = match value {
            None => Value::Null,
            Some(bytes) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| DataError::serialization("failed to deserialize string", e))?;
                Value::string(text)
            }
        };
        Ok(SchemaAndValue::new(Some(OPTIONAL_STRING_SCHEMA.clone()), value))
    }
}

impl Converter for StringConverter {
    fn configure(
        &mut self,
        settings: &HashMap<String, String>,
        is_key: bool,
    ) -> Result<(), ConfigError> {
        let config = ConverterConfig::for_type(settings, ConverterType::from_is_key(is_key))?;
        self.apply(config);
        Ok(())
    }

    fn from_connect_data(
        &self,
        _topic: &str,
        _schema: Option<&Schema>,
        value: &Value,
    ) -> Result<Option<Bytes>, DataError> {
        Ok(Self::encode(value))
    }

    fn to_connect_data(
        &self,
        _topic: &str,
        value: Option<&[u8]>,
    ) -> Result<SchemaAndValue, DataError> {
        Self::decode(value)
    }
}

impl HeaderConverter for StringConverter {
    fn config(&self) -> ConfigDef {
        ConverterConfig::config_def()
    }

    fn configure(&mut self, settings: &HashMap<String, String>) -> Result<(), ConfigError> {
        let config = ConverterConfig::for_type(settings, ConverterType::Header)?;
        self.apply(config);
        Ok(())
    }

    fn from_connect_header(
        &self,
        _topic: &str,
        _header_key: &str,
        _schema: Option<&Schema>,
        value: &Value,
    ) -> Result<Option<Bytes>, DataError> {
        Ok(Self::encode(value))
    }

    fn to_connect_header(
        &self,
        _topic: &str,
        _header_key: &str,
        value: Option<&[u8]>,
    ) -> Result<SchemaAndValue, DataError> {
        Self::decode(value)
    }
}
