//! Time of day: milliseconds since midnight, encoded as `int32`.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};

use super::check_schema;
use crate::{
    error::DataError,
    schema::{Schema, SchemaBuilder, SchemaKind},
};

pub const LOGICAL_NAME: &str = "org.apache.kafka.connect.data.Time";

pub(crate) const LABEL: &str = "Time";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Prebuilt required `Time` schema (version 1).
pub static SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_primitive(SchemaKind::Int32, LOGICAL_NAME, 1));

/// An `int32` builder tagged as `Time`, for optional variants, docs or defaults.
pub fn builder() -> SchemaBuilder {
    SchemaBuilder::int32().name(LOGICAL_NAME).version(1)
}

/// Encode a time of day. Sub-millisecond precision is dropped.
pub fn from_logical(schema: &Schema, value: NaiveTime) -> Result<i32, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    // nanosecond() exceeds 1e9 during a leap second, which lands outside the day.
    let millis = i64::from(value.num_seconds_from_midnight()) * 1000
        + i64::from(value.nanosecond() / 1_000_000);
    check_range(millis)?;
    Ok(millis as i32)
}

pub fn to_logical(schema: &Schema, value: i32) -> Result<NaiveTime, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    check_range(i64::from(value))?;
    let millis = value as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(millis / 1000, (millis % 1000) * 1_000_000)
        .ok_or_else(|| out_of_range(i64::from(value)))
}

/// Both directions accept exactly `[0, 86_400_000)`.
fn check_range(millis: i64) -> Result<(), DataError> {
    if (0..MILLIS_PER_DAY).contains(&millis) {
        Ok(())
    } else {
        Err(out_of_range(millis))
    }
}

fn out_of_range(millis: i64) -> DataError {
    DataError::OutOfRange {
        logical: LABEL,
        detail: format!("{millis} ms is outside [0, {MILLIS_PER_DAY})"),
    }
}
