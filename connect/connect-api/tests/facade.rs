use std::collections::HashMap;

use connect_api::{
    ConnectError,
    data::{INT32_SCHEMA, Value},
    header::Headers,
    storage::{Converter, HeaderConverter, SimpleHeaderConverter, StringConverter},
};

#[test]
fn headers_survive_a_header_converter_round_trip() -> Result<(), ConnectError> {
    let mut headers = Headers::new();
    headers.add_i32("attempt", 3).add_string("source", "orders-db");
    let converter = SimpleHeaderConverter::new();

    let mut decoded = Headers::new();
    for header in &headers {
        let bytes = converter.from_connect_header("topic", header.key(), header.schema(), header.value())?;
        let schema_and_value =
            converter.to_connect_header("topic", header.key(), bytes.as_deref())?;
        decoded.add_schema_and_value(header.key(), schema_and_value)?;
    }

    assert_eq!(decoded.len(), 2);
    assert_eq!(
        decoded.last_with_name("attempt").map(|h| h.value().clone()),
        Some(Value::I8(3))
    );
    assert_eq!(
        decoded.last_with_name("source").map(|h| h.value().clone()),
        Some(Value::string("orders-db"))
    );
    Ok(())
}

#[test]
fn errors_from_member_crates_convert_into_connect_error() {
    let mut headers = Headers::new();
    let err: ConnectError = headers
        .add_with_schema("n", "seven", INT32_SCHEMA.clone())
        .map(|_| ())
        .unwrap_err()
        .into();
    assert!(matches!(err, ConnectError::Data(_)));

    let mut converter = StringConverter::new();
    let mut settings = HashMap::new();
    settings.insert("converter.type".to_string(), "nope".to_string());
    let err: ConnectError = Converter::configure(&mut converter, &settings, false)
        .unwrap_err()
        .into();
    assert!(matches!(err, ConnectError::Config(_)));
}
