//! Calendar date: days since the Unix epoch, encoded as `int32`.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};

use super::check_schema;
use crate::{
    error::DataError,
    schema::{Schema, SchemaBuilder, SchemaKind},
};

pub const LOGICAL_NAME: &str = "org.apache.kafka.connect.data.Date";

pub(crate) const LABEL: &str = "Date";

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub static SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_primitive(SchemaKind::Int32, LOGICAL_NAME, 1));

pub fn builder() -> SchemaBuilder {
    SchemaBuilder::int32().name(LOGICAL_NAME).version(1)
}

pub fn from_logical(schema: &Schema, value: NaiveDate) -> Result<i32, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    Ok(value.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
}

pub fn to_logical(schema: &Schema, value: i32) -> Result<NaiveDate, DataError> {
    check_schema(schema, LOGICAL_NAME, LABEL)?;
    value
        .checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| DataError::OutOfRange {
            logical: LABEL,
            detail: format!("{value} days from the epoch is not a representable date"),
        })
}
