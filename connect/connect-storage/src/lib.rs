//! Converter boundary for connector records.
//!
//! A [`Converter`] turns a record key or value into opaque bytes and back into
//! a [`SchemaAndValue`](connect_data::SchemaAndValue); a [`HeaderConverter`]
//! does the same for individual headers. Two reference converters are
//! provided:
//!
//! ```text
//! StringConverter        value ─ display string ─ UTF-8 bytes
//!                        bytes ─ UTF-8 ─ optional string
//! SimpleHeaderConverter  value ─ convert_to_string ─ UTF-8 bytes
//!                        bytes ─ UTF-8 ─ parse_text (nom) ─ inferred SchemaAndValue
//! ```

mod config;
mod converter;
mod error;
mod inference;
mod lex;
mod parser;
mod simple_header;
mod string_converter;

pub use config::{
    ConfigDef, ConfigKey, ConfigType, ConverterConfig, ConverterType, ENCODING_CONFIG,
    TYPE_CONFIG,
};
pub use converter::{Converter, HeaderConverter};
pub use error::{ConfigError, ParseError};
pub use parser::{MAX_DEPTH, parse_text};
pub use simple_header::SimpleHeaderConverter;
pub use string_converter::StringConverter;
