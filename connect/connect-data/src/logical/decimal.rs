//! Arbitrary-precision decimal: the unscaled value as big-endian two's
//! complement `bytes`, with the scale carried by the schema's `scale` parameter.

use std::sync::LazyLock;

pub use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;

use super::check_schema;
use crate::{
    error::DataError,
    schema::{Schema, SchemaBuilder, SchemaKind},
};

pub const LOGICAL_NAME: &str = "org.apache.kafka.connect.data.Decimal";

/// Schema parameter holding the scale as decimal text.
pub const SCALE_FIELD: &str = "scale";

pub(crate) const LABEL: &str = "Decimal";

/// Prebuilt required `Decimal` schema with scale 0.
pub static SCHEMA: LazyLock<Schema> = LazyLock::new(|| schema(0));

/// Required `Decimal` schema (version 1) with the given scale.
pub fn schema(scale: i32) -> Schema {
    Schema::named_primitive(SchemaKind::Bytes, LOGICAL_NAME, 1)
        .with_parameter(SCALE_FIELD, scale.to_string())
}

/// A `bytes` builder tagged as `Decimal`, for optional variants, docs or defaults.
pub fn builder(scale: i32) -> SchemaBuilder {
    SchemaBuilder::bytes()
        .name(LOGICAL_NAME)
        .version(1)
        .parameter(SCALE_FIELD, scale.to_string())
}

/// The schema whose scale matches `value`'s own.
pub fn schema_for(value: &BigDecimal) -> Result<Schema, DataError> {
    let (_, exponent) = value.as_bigint_and_exponent();
    let scale = i32::try_from(exponent).map_err(|_| DataError::OutOfRange {
        logical: LABEL,
        detail: format!("scale {exponent} does not fit in 32 bits"),
    })?;
    Ok(schema(scale))
}

/// The scale declared by a `Decimal` schema.
pub fn scale(schema: &Schema) -> Result<i32, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    schema
        .parameters()
        .get(SCALE_FIELD)
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| {
            DataError::invalid_schema(format!(
                "{LABEL} schema needs an integer {SCALE_FIELD:?} parameter"
            ))
        })
}

/// Encode the unscaled value. The decimal's scale must equal the schema's.
pub fn from_logical(schema: &Schema, value: &BigDecimal) -> Result<Vec<u8>, DataError> {
    let scale = scale(schema)?;
    let (unscaled, exponent) = value.as_bigint_and_exponent();
    if exponent != i64::from(scale) {
        return Err(DataError::invalid_value(format!(
            "decimal has scale {exponent} but the schema declares {scale}"
        )));
    }
    Ok(unscaled.to_signed_bytes_be())
}

pub fn to_logical(schema: &Schema, value: &[u8]) -> Result<BigDecimal, DataError> {
    let scale = scale(schema)?;
    Ok(BigDecimal::new(
        BigInt::from_signed_bytes_be(value),
        i64::from(scale),
    ))
}
