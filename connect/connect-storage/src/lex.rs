//! Classification of bare (unquoted) text tokens.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use connect_data::{
    SchemaAndValue, Value,
    logical::{date, time, timestamp},
};

const TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const DATE_PATTERN: &str = "%Y-%m-%d";
const TIME_PATTERN: &str = "%H:%M:%S%.fZ";

/// Characters that delimit tokens inside arrays and maps.
pub fn is_structural(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}' | ',' | ':' | '"')
}

/// Interpret a trimmed token as a boolean, null or number.
///
/// Integers take the narrowest of `i8`..`i64` that holds them; integers wider
/// than 64 bits and decimal literals become floats: `f32` when the shortest
/// `f32` rendering reads back as the same number as the token, so `0.1` is an
/// `f32`, and `f64` otherwise. Returns `None` for anything else.
pub fn classify_token(token: &str) -> Option<Value> {
    if token.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if token.eq_ignore_ascii_case("null") {
        return Some(Value::Null);
    }
    if is_integer_literal(token) {
        if let Ok(v) = token.parse::<i64>() {
            return Some(narrowest_integer(v));
        }
    }
    if is_float_literal(token) {
        let wide = token.parse::<f64>().ok().filter(|v| v.is_finite())?;
        return Some(match token.parse::<f32>() {
            Ok(narrow) if narrow.is_finite() && narrow.to_string().parse::<f64>() == Ok(wide) => {
                Value::F32(narrow)
            }
            _ => Value::F64(wide),
        });
    }
    None
}

fn narrowest_integer(v: i64) -> Value {
    if let Ok(v) = i8::try_from(v) {
        Value::I8(v)
    } else if let Ok(v) = i16::try_from(v) {
        Value::I16(v)
    } else if let Ok(v) = i32::try_from(v) {
        Value::I32(v)
    } else {
        Value::I64(v)
    }
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// Recognize ISO-8601 timestamp, date and time text, in that order.
pub fn parse_temporal(token: &str) -> Option<SchemaAndValue> {
    if let Ok(instant) = NaiveDateTime::parse_from_str(token, TIMESTAMP_PATTERN) {
        let millis = instant.and_utc().timestamp_millis();
        return Some(SchemaAndValue::new(
            Some(timestamp::SCHEMA.clone()),
            Value::I64(millis),
        ));
    }
    if let Ok(day) = NaiveDate::parse_from_str(token, DATE_PATTERN) {
        let days = date::from_logical(&date::SCHEMA, day).ok()?;
        return Some(SchemaAndValue::new(
            Some(date::SCHEMA.clone()),
            Value::I32(days),
        ));
    }
    if let Ok(of_day) = NaiveTime::parse_from_str(token, TIME_PATTERN) {
        let millis = time::from_logical(&time::SCHEMA, of_day).ok()?;
        return Some(SchemaAndValue::new(
            Some(time::SCHEMA.clone()),
            Value::I32(millis),
        ));
    }
    None
}
