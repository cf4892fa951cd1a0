use std::fs;

use sif_model::{ConfigError, ConversionConfig, fields};

fn builtin_text() -> String {
    let config = ConversionConfig::builtin().expect("builtin config");
    config.to_toml_string().expect("serialize config")
}

#[test]
fn loads_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    let text = builtin_text().replace("\"CIRCULATION\"", "\"GENERAL\"");
    fs::write(&path, text).unwrap();

    let config = ConversionConfig::load(&path).expect("load config");
    assert_eq!(config.codes.note_type, "GENERAL");
    assert!(config.layout.base.contains(fields::PATRON_ID));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ConversionConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_or_builtin_without_path_uses_builtin() {
    let config = ConversionConfig::load_or_builtin(None).unwrap();
    assert_eq!(config, ConversionConfig::builtin().unwrap());
}

#[test]
fn malformed_toml_is_rejected() {
    let err = ConversionConfig::from_toml_str("[layout\nbase = 3", "broken.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Toml { ref origin, .. } if origin == "broken.toml"));
}

#[test]
fn code_table_without_default_is_rejected() {
    let text = builtin_text();
    let mut config: ConversionConfig = toml::from_str(&text).unwrap();
    config.tables.barcode_status = sif_model::CodeTable::new([("1", "ACTIVE")]);
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingDefault {
            table: "barcode_status"
        }
    ));
}

#[test]
fn layout_missing_mapped_field_is_rejected() {
    let text = r#"
[layout]
base = [{ name = "patron_id", width = 10 }]
address = [{ name = "address_type", width = 1 }]

[defaults]
patron_expiry = "2099.12.31"
patron_purge = "2099.12.31"
address_begin = "2000.01.01"
address_end = "2099.12.31"

[codes]
user_status = "ACTIVE"
note_type = "GENERAL"
identifier_type = "BARCODE"
primary_email_type = "personal"
default_email_type = "alternative"

[tables.address_type]
DEFAULT = "home"

[tables.barcode_status]
DEFAULT = "ACTIVE"
"#;
    let err = ConversionConfig::from_toml_str(text, "small.toml").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField { layout: "base", ref name } if name == fields::FIRST_NAME
    ));
}
