//! Settings shared by the reference converters.

use std::{collections::HashMap, fmt};

use crate::error::ConfigError;

pub const TYPE_CONFIG: &str = "converter.type";
pub const ENCODING_CONFIG: &str = "converter.encoding";

const DEFAULT_ENCODING: &str = "UTF-8";

/// Which part of a record a converter is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterType {
    Key,
    Value,
    Header,
}

impl ConverterType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Value => "value",
            Self::Header => "header",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "key" => Ok(Self::Key),
            "value" => Ok(Self::Value),
            "header" => Ok(Self::Header),
            _ => Err(ConfigError::UnknownConverterType {
                value: value.to_string(),
            }),
        }
    }

    pub fn from_is_key(is_key: bool) -> Self {
        if is_key { Self::Key } else { Self::Value }
    }
}

impl fmt::Display for ConverterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed converter settings.
///
/// Unknown keys are ignored so that one settings map can be shared between
/// several components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    converter_type: ConverterType,
    encoding: String,
}

impl ConverterConfig {
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let converter_type = match settings.get(TYPE_CONFIG) {
            Some(value) => ConverterType::parse(value)?,
            None => ConverterType::Value,
        };
        let encoding = match settings.get(ENCODING_CONFIG) {
            Some(value) => normalize_encoding(value)?,
            None => DEFAULT_ENCODING.to_string(),
        };
        Ok(Self {
            converter_type,
            encoding,
        })
    }

    /// Parse `settings` with the role forced to `converter_type`.
    pub fn for_type(
        settings: &HashMap<String, String>,
        converter_type: ConverterType,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_settings(settings)?;
        config.converter_type = converter_type;
        Ok(config)
    }

    pub fn converter_type(&self) -> ConverterType {
        self.converter_type
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Descriptors for the keys understood by [`ConverterConfig::from_settings`].
    pub fn config_def() -> ConfigDef {
        ConfigDef::new()
            .define(ConfigKey::new(
                TYPE_CONFIG,
                ConfigType::String,
                Some(ConverterType::Value.name()),
                "How this converter will be used: key, value or header.",
            ))
            .define(ConfigKey::new(
                ENCODING_CONFIG,
                ConfigType::String,
                Some(DEFAULT_ENCODING),
                "Character set used to encode strings. Only UTF-8 is supported.",
            ))
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            converter_type: ConverterType::Value,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

fn normalize_encoding(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("utf-8") || trimmed.eq_ignore_ascii_case("utf8") {
        Ok(DEFAULT_ENCODING.to_string())
    } else {
        Err(ConfigError::UnsupportedEncoding {
            encoding: value.to_string(),
        })
    }
}

/// Type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigType {
    Boolean,
    Int,
    Long,
    Double,
    String,
    List,
}

/// Description of one accepted setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    pub name: String,
    pub config_type: ConfigType,
    pub default_value: Option<String>,
    pub documentation: String,
}

impl ConfigKey {
    pub fn new(
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: Option<&str>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            config_type,
            default_value: default_value.map(str::to_string),
            documentation: documentation.into(),
        }
    }
}

/// Ordered set of [`ConfigKey`]s a component accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDef {
    keys: Vec<ConfigKey>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the key with the same name.
    pub fn define(mut self, key: ConfigKey) -> Self {
        match self.keys.iter_mut().find(|k| k.name == key.name) {
            Some(existing) => *existing = key,
            None => self.keys.push(key),
        }
        self
    }

    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
