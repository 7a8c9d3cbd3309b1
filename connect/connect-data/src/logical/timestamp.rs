//! Absolute instant: milliseconds since the Unix epoch, encoded as `int64`.

use std::{
    sync::LazyLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use super::check_schema;
use crate::{
    error::DataError,
    schema::{Schema, SchemaBuilder, SchemaKind},
};

pub const LOGICAL_NAME: &str = "org.apache.kafka.connect.data.Timestamp";

pub(crate) const LABEL: &str = "Timestamp";

pub static SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_primitive(SchemaKind::Int64, LOGICAL_NAME, 1));

pub fn builder() -> SchemaBuilder {
    SchemaBuilder::int64().name(LOGICAL_NAME).version(1)
}

/// Encode an instant, truncating sub-millisecond precision toward the past.
pub fn from_logical(schema: &Schema, value: SystemTime) -> Result<i64, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    let millis: i128 = match value.duration_since(UNIX_EPOCH) {
        Ok(after) => i128::try_from(after.as_millis()).unwrap_or(i128::MAX),
        Err(before) => {
            let before = before.duration();
            let whole = i128::try_from(before.as_millis()).unwrap_or(i128::MAX);
            if before.subsec_nanos() % 1_000_000 == 0 {
                -whole
            } else {
                -whole - 1
            }
        }
    };
    i64::try_from(millis).map_err(|_| DataError::OutOfRange {
        logical: LABEL,
        detail: format!("{millis} ms does not fit in a 64-bit timestamp"),
    })
}

/// Total over `i64`; every millisecond count maps to an instant.
pub fn to_logical(schema: &Schema, value: i64) -> Result<SystemTime, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    let offset = Duration::from_millis(value.unsigned_abs());
    let instant = if value >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    instant.ok_or_else(|| DataError::OutOfRange {
        logical: LABEL,
        detail: format!("{value} ms is not representable by the platform clock"),
    })
}
