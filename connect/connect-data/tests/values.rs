use connect_data::{
    INT8_SCHEMA, INT32_SCHEMA, OPTIONAL_STRING_SCHEMA, STRING_SCHEMA, SchemaBuilder, Struct,
    Value,
    logical::{date, time, timestamp},
    values::{convert_to_string, infer_schema},
};

#[test]
fn scalars_render_in_display_form() {
    assert_eq!(convert_to_string(None, &Value::Bool(true)), "true");
    assert_eq!(convert_to_string(None, &Value::I16(-12)), "-12");
    assert_eq!(convert_to_string(None, &Value::F64(2.0)), "2.0");
    assert_eq!(convert_to_string(None, &Value::F32(1.5)), "1.5");
    assert_eq!(convert_to_string(None, &Value::string("plain text")), "plain text");
    assert_eq!(convert_to_string(None, &Value::bytes(b"hi")), "aGk=");
    assert_eq!(convert_to_string(None, &Value::Null), "null");
}

#[test]
fn nested_strings_are_quoted_and_escaped() {
    let value = Value::Array(vec![
        Value::string("a"),
        Value::string("say \"hi\""),
        Value::Null,
    ]);
    assert_eq!(
        convert_to_string(None, &value),
        r#"["a","say \"hi\"",null]"#
    );

    let map = Value::Map(vec![
        (Value::string("x"), Value::I32(1)),
        (Value::string("y"), Value::I32(2)),
    ]);
    assert_eq!(convert_to_string(None, &map), r#"{"x":1,"y":2}"#);
}

#[test]
fn structs_render_as_field_maps() {
    let schema = SchemaBuilder::structure()
        .field("id", INT32_SCHEMA.clone())
        .field("label", OPTIONAL_STRING_SCHEMA.clone())
        .build()
        .unwrap();
    let mut record = Struct::new(schema).unwrap();
    record.put("id", 7).unwrap().put("label", "seven").unwrap();
    assert_eq!(
        Value::Struct(record).to_string(),
        r#"{"id":7,"label":"seven"}"#
    );
}

#[test]
fn logical_values_render_as_iso_text() {
    assert_eq!(
        convert_to_string(Some(&time::SCHEMA), &Value::I32(45_296_789)),
        "12:34:56.789Z"
    );
    assert_eq!(
        convert_to_string(Some(&date::SCHEMA), &Value::I32(18_262)),
        "2020-01-01"
    );
    assert_eq!(
        convert_to_string(Some(&timestamp::SCHEMA), &Value::I64(1_577_836_800_000)),
        "2020-01-01T00:00:00.000Z"
    );
    // Without the schema the raw encoding is shown.
    assert_eq!(convert_to_string(None, &Value::I32(45_296_789)), "45296789");
}

#[test]
fn infer_schema_handles_scalars_and_homogeneous_containers() {
    assert_eq!(infer_schema(&Value::string("x")), Some(STRING_SCHEMA.clone()));
    assert_eq!(infer_schema(&Value::Null), None);

    let bytes = Value::Array(vec![Value::I8(1), Value::I8(2)]);
    assert_eq!(
        infer_schema(&bytes),
        Some(SchemaBuilder::array(INT8_SCHEMA.clone()).build().unwrap())
    );

    let mixed = Value::Array(vec![Value::I8(1), Value::string("2")]);
    assert_eq!(infer_schema(&mixed), None);
    assert_eq!(infer_schema(&Value::Array(Vec::new())), None);

    let map = Value::Map(vec![(Value::string("k"), Value::I32(1))]);
    assert_eq!(
        infer_schema(&map),
        Some(
            SchemaBuilder::map(STRING_SCHEMA.clone(), INT32_SCHEMA.clone())
                .build()
                .unwrap()
        )
    );
}
