use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use connect_data::{
    BOOLEAN_SCHEMA, DataError, Field, INT8_SCHEMA, INT32_SCHEMA, INT64_SCHEMA,
    OPTIONAL_INT32_SCHEMA, OPTIONAL_STRING_SCHEMA, STRING_SCHEMA, Schema, SchemaAndValue,
    SchemaBuilder, SchemaType, Struct, Value,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn person_schema() -> Result<Schema, DataError> {
    SchemaBuilder::structure()
        .name("com.example.Person")
        .field("name", STRING_SCHEMA.clone())
        .field("age", OPTIONAL_INT32_SCHEMA.clone())
        .field(
            "tags",
            SchemaBuilder::array(STRING_SCHEMA.clone()).optional().build()?,
        )
        .build()
}

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn field_new_sets_all_fields() {
    let field = Field::new("count", 2, INT64_SCHEMA.clone());
    assert_eq!(field.name(), "count");
    assert_eq!(field.index(), 2);
    assert_eq!(field.schema().schema_type(), SchemaType::Int64);
}

#[test]
fn primitive_flags_match_kinds() {
    assert!(SchemaType::Int8.is_primitive());
    assert!(SchemaType::Bytes.is_primitive());
    assert!(!SchemaType::Array.is_primitive());
    assert!(!SchemaType::Map.is_primitive());
    assert!(!SchemaType::Struct.is_primitive());
    assert_eq!(SchemaType::Float32.to_string(), "float32");
}

#[test]
fn singletons_are_shared_and_flagged() {
    assert!(Schema::ptr_eq(&INT8_SCHEMA, &INT8_SCHEMA.clone()));
    assert!(!INT32_SCHEMA.is_optional());
    assert!(OPTIONAL_STRING_SCHEMA.is_optional());
    assert_eq!(*INT32_SCHEMA, SchemaBuilder::int32().build().unwrap());
    assert_ne!(*INT32_SCHEMA, *OPTIONAL_INT32_SCHEMA);
}

#[test]
fn struct_fields_have_contiguous_indices() -> TestResult {
    let schema = person_schema()?;
    let fields = schema.fields()?;
    assert_eq!(fields.len(), 3);
    for (position, field) in fields.iter().enumerate() {
        assert_eq!(field.index(), position);
    }
    assert_eq!(schema.field("age")?.map(Field::index), Some(1));
    assert!(schema.field("missing")?.is_none());
    Ok(())
}

#[test]
fn kind_specific_accessors_fail_on_other_kinds() {
    assert!(matches!(
        INT32_SCHEMA.fields(),
        Err(DataError::SchemaShape {
            schema_type: SchemaType::Int32,
            ..
        })
    ));
    assert!(matches!(
        INT32_SCHEMA.field("x"),
        Err(DataError::SchemaShape { .. })
    ));
    assert!(matches!(
        STRING_SCHEMA.value_schema(),
        Err(DataError::SchemaShape { .. })
    ));
    let array = SchemaBuilder::array(INT8_SCHEMA.clone()).build().unwrap();
    assert!(matches!(
        array.key_schema(),
        Err(DataError::SchemaShape {
            schema_type: SchemaType::Array,
            ..
        })
    ));
    assert_eq!(array.value_schema().unwrap(), &*INT8_SCHEMA);
}

#[test]
fn builder_rejects_inconsistent_schemas() {
    let fields_on_int = SchemaBuilder::int32()
        .field("x", INT32_SCHEMA.clone())
        .build();
    assert!(matches!(fields_on_int, Err(DataError::InvalidSchema { .. })));

    let duplicate = SchemaBuilder::structure()
        .field("x", INT32_SCHEMA.clone())
        .field("x", STRING_SCHEMA.clone())
        .build();
    assert!(matches!(duplicate, Err(DataError::InvalidSchema { .. })));

    let array_without_element = SchemaBuilder::new(SchemaType::Array).build();
    assert!(matches!(
        array_without_element,
        Err(DataError::InvalidSchema { .. })
    ));

    let bad_default = SchemaBuilder::int32().default_value("seven").build();
    assert!(matches!(bad_default, Err(DataError::InvalidSchema { .. })));
}

#[test]
fn default_value_is_kept_when_valid() -> TestResult {
    let schema = SchemaBuilder::int32().default_value(7).build()?;
    assert_eq!(schema.default_value(), Some(&Value::I32(7)));
    assert_eq!(INT32_SCHEMA.default_value(), None);
    Ok(())
}

#[test]
fn equality_and_hash_are_structural() -> TestResult {
    let a = person_schema()?;
    let b = person_schema()?;
    assert!(!Schema::ptr_eq(&a, &b));
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&a));
    assert_eq!(hash_of(&a), hash_of(&b));

    let renamed = SchemaBuilder::from_schema(&a).name("com.example.Other").build()?;
    assert_ne!(a, renamed);

    let with_params_ab = SchemaBuilder::string()
        .parameter("a", "1")
        .parameter("b", "2")
        .build()?;
    let with_params_ba = SchemaBuilder::string()
        .parameters([("b", "2"), ("a", "1")])
        .build()?;
    assert_eq!(with_params_ab, with_params_ba);
    assert_eq!(hash_of(&with_params_ab), hash_of(&with_params_ba));
    Ok(())
}

#[test]
fn from_schema_can_derive_optional_variant() -> TestResult {
    let required = person_schema()?;
    let optional = SchemaBuilder::from_schema(&required).optional().build()?;
    assert!(optional.is_optional());
    assert_eq!(optional.fields()?, required.fields()?);
    assert_eq!(optional.name(), required.name());
    Ok(())
}

#[test]
fn validate_value_checks_kind_optionality_and_nesting() -> TestResult {
    assert!(INT32_SCHEMA.validate_value(&Value::I32(1)).is_ok());
    assert!(INT32_SCHEMA.validate_value(&Value::I64(1)).is_err());
    assert!(INT32_SCHEMA.validate_value(&Value::Null).is_err());
    assert!(OPTIONAL_INT32_SCHEMA.validate_value(&Value::Null).is_ok());

    let list = SchemaBuilder::array(INT32_SCHEMA.clone()).build()?;
    assert!(
        list.validate_value(&Value::Array(vec![Value::I32(1), Value::I32(2)]))
            .is_ok()
    );
    assert!(
        list.validate_value(&Value::Array(vec![Value::I32(1), Value::Null]))
            .is_err()
    );

    let map = SchemaBuilder::map(STRING_SCHEMA.clone(), BOOLEAN_SCHEMA.clone()).build()?;
    assert!(
        map.validate_value(&Value::Map(vec![(Value::string("k"), Value::Bool(true))]))
            .is_ok()
    );
    assert!(
        map.validate_value(&Value::Map(vec![(Value::I32(1), Value::Bool(true))]))
            .is_err()
    );
    Ok(())
}

#[test]
fn map_values_reject_duplicate_keys() -> TestResult {
    let map = SchemaBuilder::map(STRING_SCHEMA.clone(), INT32_SCHEMA.clone()).build()?;
    let duplicated = Value::Map(vec![
        (Value::string("a"), Value::I32(1)),
        (Value::string("a"), Value::I32(2)),
    ]);
    assert!(matches!(
        map.validate_value(&duplicated),
        Err(DataError::InvalidValue { .. })
    ));

    let defaulted = SchemaBuilder::map(STRING_SCHEMA.clone(), INT32_SCHEMA.clone())
        .default_value(duplicated)
        .build();
    assert!(defaulted.is_err());
    Ok(())
}

#[test]
fn map_equality_ignores_entry_order() -> TestResult {
    let forward = Value::Map(vec![
        (Value::string("a"), Value::I32(1)),
        (Value::string("b"), Value::I32(2)),
    ]);
    let backward = Value::Map(vec![
        (Value::string("b"), Value::I32(2)),
        (Value::string("a"), Value::I32(1)),
    ]);
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));

    let other = Value::Map(vec![
        (Value::string("a"), Value::I32(2)),
        (Value::string("b"), Value::I32(1)),
    ]);
    assert_ne!(forward, other);

    let with_default = |value: Value| {
        SchemaBuilder::map(STRING_SCHEMA.clone(), INT32_SCHEMA.clone())
            .default_value(value)
            .build()
    };
    let a = with_default(forward)?;
    let b = with_default(backward)?;
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    Ok(())
}

#[test]
fn struct_put_get_and_validate() -> TestResult {
    let schema = person_schema()?;
    let mut person = Struct::new(schema.clone())?;
    assert!(person.validate().is_err(), "required name is unset");

    person.put("name", "Ada")?.put("age", 36)?;
    person.validate()?;
    assert_eq!(person.get("name")?, &Value::string("Ada"));
    assert_eq!(person.get("tags")?, &Value::Null);
    assert!(person.put("age", "old").is_err());
    assert!(person.put("unknown", 1).is_err());
    assert!(schema.validate_value(&Value::Struct(person.clone())).is_ok());

    let other = SchemaBuilder::from_schema(&schema).name("other").build()?;
    assert!(other.validate_value(&Value::Struct(person)).is_err());
    Ok(())
}

#[test]
fn struct_get_falls_back_to_field_default() -> TestResult {
    let schema = SchemaBuilder::structure()
        .field("retries", SchemaBuilder::int32().default_value(3).build()?)
        .build()?;
    let record = Struct::new(schema)?;
    assert_eq!(record.get("retries")?, &Value::I32(3));
    assert_eq!(record.get_without_default("retries")?, &Value::Null);
    record.validate()?;
    Ok(())
}

#[test]
fn struct_requires_struct_schema() {
    assert!(matches!(
        Struct::new(STRING_SCHEMA.clone()),
        Err(DataError::SchemaShape { .. })
    ));
}

#[test]
fn float_values_compare_by_bits() {
    assert_eq!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    assert_ne!(Value::F32(0.0), Value::F32(-0.0));
    assert_eq!(hash_of(&Value::F64(1.5)), hash_of(&Value::F64(1.5)));
    assert_ne!(Value::I32(1), Value::I64(1));
}

#[test]
fn typed_accessors_report_mismatch() {
    assert_eq!(Value::I32(4).try_i32(), Ok(Some(4)));
    assert_eq!(Value::Null.try_str(), Ok(None));
    let err = Value::Bool(true).try_i64().unwrap_err();
    assert_eq!(err.expected, "I64");
    assert_eq!(err.actual, "Bool");
}

#[test]
fn schema_and_value_null_is_canonical() {
    assert!(SchemaAndValue::NULL.is_null());
    assert_eq!(SchemaAndValue::default(), SchemaAndValue::NULL);
    let pair = SchemaAndValue::new(Some(STRING_SCHEMA.clone()), Value::string("x"));
    assert!(!pair.is_null());
    assert_eq!(pair.schema(), Some(&*STRING_SCHEMA));
    let (schema, value) = pair.into_parts();
    assert_eq!(schema, Some(STRING_SCHEMA.clone()));
    assert_eq!(value, Value::string("x"));
}
