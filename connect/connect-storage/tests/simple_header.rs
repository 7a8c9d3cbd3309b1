use std::collections::HashMap;

use connect_data::{
    BYTES_SCHEMA, DataError, FLOAT32_SCHEMA, INT8_SCHEMA, INT32_SCHEMA, STRING_SCHEMA,
    SchemaAndValue, SchemaBuilder, Struct, Value,
    logical::{time, timestamp},
};
use connect_storage::{ConfigError, HeaderConverter, SimpleHeaderConverter};

// ── helpers ──────────────────────────────────────────────────────────────────

fn encode(schema: Option<&connect_data::Schema>, value: &Value) -> Vec<u8> {
    SimpleHeaderConverter::new()
        .from_connect_header("topic", "h", schema, value)
        .unwrap()
        .expect("non-null value encodes to bytes")
        .to_vec()
}

fn decode(bytes: &[u8]) -> Result<SchemaAndValue, DataError> {
    SimpleHeaderConverter::new().to_connect_header("topic", "h", Some(bytes))
}

// ── encoding ─────────────────────────────────────────────────────────────────

#[test]
fn null_value_encodes_to_no_bytes() {
    let converter = SimpleHeaderConverter::new();
    assert_eq!(
        converter
            .from_connect_header("topic", "h", None, &Value::Null)
            .unwrap(),
        None
    );
    assert_eq!(
        converter.to_connect_header("topic", "h", None).unwrap(),
        SchemaAndValue::NULL
    );
}

#[test]
fn logical_values_encode_as_iso_text() {
    assert_eq!(
        encode(Some(&timestamp::SCHEMA), &Value::I64(1_577_836_800_000)),
        b"2020-01-01T00:00:00.000Z"
    );
    assert_eq!(encode(Some(&time::SCHEMA), &Value::I32(0)), b"00:00:00.000Z");
}

#[test]
fn struct_values_encode_as_field_maps() {
    let schema = SchemaBuilder::structure()
        .field("id", INT32_SCHEMA.clone())
        .build()
        .unwrap();
    let mut record = Struct::new(schema.clone()).unwrap();
    record.put("id", 7).unwrap();
    assert_eq!(
        encode(Some(&schema), &Value::Struct(record)),
        br#"{"id":7}"#
    );
}

// ── decoding ─────────────────────────────────────────────────────────────────

#[test]
fn typed_values_round_trip() {
    let list = SchemaBuilder::array(INT8_SCHEMA.clone()).build().unwrap();
    let value = Value::Array(vec![Value::I8(1), Value::I8(2)]);
    let decoded = decode(&encode(Some(&list), &value)).unwrap();
    assert_eq!(decoded.schema(), Some(&list));
    assert_eq!(decoded.value(), &value);

    let instant = Value::I64(1_700_000_000_123);
    let decoded = decode(&encode(Some(&timestamp::SCHEMA), &instant)).unwrap();
    assert_eq!(decoded.schema(), Some(&*timestamp::SCHEMA));
    assert_eq!(decoded.value(), &instant);
}

#[test]
fn empty_bytes_decode_to_empty_string() {
    let decoded = decode(b"").unwrap();
    assert_eq!(decoded.schema(), Some(&*STRING_SCHEMA));
    assert_eq!(decoded.value(), &Value::string(""));
}

#[test]
fn plain_text_decodes_to_string() {
    let decoded = decode(b"application/json").unwrap();
    assert_eq!(decoded.schema(), Some(&*STRING_SCHEMA));
    assert_eq!(decoded.value(), &Value::string("application/json"));
}

#[test]
fn malformed_text_falls_back_to_bytes() {
    let decoded = decode(b"[1,,2]").unwrap();
    assert_eq!(decoded.schema(), Some(&*BYTES_SCHEMA));
    assert_eq!(decoded.value(), &Value::bytes(b"[1,,2]"));
}

#[test]
fn deeply_nested_text_falls_back_to_bytes() {
    let n = 10_000;
    let unclosed = "[".repeat(n);
    let balanced = format!("{}{}", "[".repeat(n), "]".repeat(n));
    for text in [unclosed, balanced] {
        let decoded = decode(text.as_bytes()).unwrap();
        assert_eq!(decoded.schema(), Some(&*BYTES_SCHEMA));
        assert_eq!(decoded.value(), &Value::bytes(text.as_bytes()));
    }
}

#[test]
fn float32_values_keep_their_schema() {
    for v in [0.1_f32, 1.5, -2.75, 1e-3] {
        let decoded = decode(&encode(Some(&FLOAT32_SCHEMA), &Value::F32(v))).unwrap();
        assert_eq!(decoded.schema(), Some(&*FLOAT32_SCHEMA), "{v}");
        assert_eq!(decoded.value(), &Value::F32(v));
    }
}

#[test]
fn invalid_utf8_falls_back_to_bytes() {
    let decoded = decode(&[0xc3, 0x28]).unwrap();
    assert_eq!(decoded.schema(), Some(&*BYTES_SCHEMA));
    assert_eq!(decoded.value(), &Value::bytes(b"\xc3\x28"));
}

#[test]
fn unclosed_container_is_an_error() {
    assert!(matches!(
        decode(b"[1,2"),
        Err(DataError::Serialization { source: Some(_), .. })
    ));
}

#[test]
fn configure_accepts_utf8_only() {
    let mut converter = SimpleHeaderConverter::new();
    let mut settings = HashMap::new();
    settings.insert("converter.encoding".to_string(), "UTF8".to_string());
    converter.configure(&settings).unwrap();

    settings.insert("converter.encoding".to_string(), "ascii".to_string());
    assert!(matches!(
        converter.configure(&settings),
        Err(ConfigError::UnsupportedEncoding { .. })
    ));
    assert!(!converter.config().is_empty());
}
