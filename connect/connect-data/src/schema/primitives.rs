//! Shared singleton schemas for every primitive kind, in required and optional form.

use std::sync::LazyLock;

use super::{Schema, SchemaKind};

pub static INT8_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int8, false));
pub static INT16_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int16, false));
pub static INT32_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int32, false));
pub static INT64_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int64, false));
pub static FLOAT32_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Float32, false));
pub static FLOAT64_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Float64, false));
pub static BOOLEAN_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Boolean, false));
pub static STRING_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::String, false));
pub static BYTES_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Bytes, false));

pub static OPTIONAL_INT8_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int8, true));
pub static OPTIONAL_INT16_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int16, true));
pub static OPTIONAL_INT32_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int32, true));
pub static OPTIONAL_INT64_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Int64, true));
pub static OPTIONAL_FLOAT32_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Float32, true));
pub static OPTIONAL_FLOAT64_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Float64, true));
pub static OPTIONAL_BOOLEAN_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Boolean, true));
pub static OPTIONAL_STRING_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::String, true));
pub static OPTIONAL_BYTES_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::primitive(SchemaKind::Bytes, true));
