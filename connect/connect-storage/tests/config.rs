use std::collections::HashMap;

use connect_storage::{
    ConfigDef, ConfigError, ConfigKey, ConfigType, ConverterConfig, ConverterType,
    ENCODING_CONFIG, TYPE_CONFIG,
};

fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_to_value_role_and_utf8() {
    let config = ConverterConfig::from_settings(&HashMap::new()).unwrap();
    assert_eq!(config.converter_type(), ConverterType::Value);
    assert_eq!(config.encoding(), "UTF-8");
    assert_eq!(config, ConverterConfig::default());
}

#[test]
fn parses_type_case_insensitively_and_ignores_unknown_keys() {
    let config = ConverterConfig::from_settings(&settings(&[
        (TYPE_CONFIG, "HEADER"),
        (ENCODING_CONFIG, "utf-8"),
        ("schemas.enable", "false"),
    ]))
    .unwrap();
    assert_eq!(config.converter_type(), ConverterType::Header);
    assert_eq!(config.encoding(), "UTF-8");
}

#[test]
fn rejects_unknown_type_and_other_charsets() {
    assert!(matches!(
        ConverterConfig::from_settings(&settings(&[(TYPE_CONFIG, "body")])),
        Err(ConfigError::UnknownConverterType { value }) if value == "body"
    ));
    assert!(matches!(
        ConverterConfig::from_settings(&settings(&[(ENCODING_CONFIG, "UTF-16")])),
        Err(ConfigError::UnsupportedEncoding { .. })
    ));
}

#[test]
fn for_type_overrides_configured_role() {
    let config =
        ConverterConfig::for_type(&settings(&[(TYPE_CONFIG, "key")]), ConverterType::Value)
            .unwrap();
    assert_eq!(config.converter_type(), ConverterType::Value);
    assert_eq!(ConverterType::from_is_key(true).to_string(), "key");
}

#[test]
fn config_def_describes_known_keys() {
    let def = ConverterConfig::config_def();
    assert_eq!(def.keys().len(), 2);
    let key = def.key(TYPE_CONFIG).unwrap();
    assert_eq!(key.config_type, ConfigType::String);
    assert_eq!(key.default_value.as_deref(), Some("value"));
    assert!(def.key("missing").is_none());
    let encoding = def.key(ENCODING_CONFIG).unwrap();
    assert_eq!(encoding.default_value.as_deref(), Some("UTF-8"));
    assert!(encoding.documentation.contains("Only UTF-8"));

    let redefined = ConfigDef::new()
        .define(ConfigKey::new("a", ConfigType::Int, None, "first"))
        .define(ConfigKey::new("a", ConfigType::Long, Some("1"), "second"));
    assert_eq!(redefined.keys().len(), 1);
    assert_eq!(redefined.key("a").unwrap().config_type, ConfigType::Long);
    assert!(ConfigDef::new().is_empty());
}
