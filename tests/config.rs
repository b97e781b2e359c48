//! Configuration system tests
//!
//! Tests for config paths, config file loading and dataset parsing.

use std::io::Write;

use tagfield::config::{ChipPlacement, TagConfig, TagConfigFile, TransformRegistry};
use tagfield::config_paths;
use tagfield::{TagField, TextHost};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_is_under_config_dir() {
    if let (Some(dir), Some(file)) = (config_paths::config_dir(), config_paths::config_file()) {
        assert!(file.starts_with(&dir));
        assert!(file.to_string_lossy().ends_with("config.yaml"));
        assert!(dir.to_string_lossy().contains("tagfield"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(dir), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&dir));
    }
}

// ========================================================================
// Config File Tests
// ========================================================================

#[test]
fn test_config_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "separator: \"|\"\nduplicate: true\nvalidate: \"^#\"\nvalidate-modifiers: \"\"\nmax: 5"
    )
    .unwrap();

    let loaded = TagConfigFile::from_file(file.path()).unwrap();
    assert_eq!(loaded.separator.as_deref(), Some("|"));
    assert!(loaded.duplicate);
    assert_eq!(loaded.max, Some(5));

    let config =
        TagConfig::from_dataset(&loaded.into_dataset(), &TransformRegistry::default()).unwrap();
    assert_eq!(config.separator, "|");
    assert!(config.duplicates_allowed);
    assert_eq!(config.max_tags, Some(5));
    assert!(config.validator.is_valid("#rust"));
    assert!(!config.validator.is_valid("rust"));
}

#[test]
fn test_config_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TagConfigFile::from_file(&dir.path().join("nope.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_config_file_malformed_yaml_is_an_error() {
    assert!(TagConfigFile::from_yaml("max: [not, a, number]").is_err());
}

#[test]
fn test_config_file_roundtrip() {
    let file = TagConfigFile {
        separator: Some(";".to_string()),
        x_position: Some("left".to_string()),
        rainbow: true,
        color_seed: Some(9),
        ..TagConfigFile::default()
    };
    let yaml = serde_yaml::to_string(&file).unwrap();
    assert_eq!(TagConfigFile::from_yaml(&yaml).unwrap(), file);
}

// ========================================================================
// Dataset-driven attach
// ========================================================================

#[test]
fn test_field_uses_host_dataset() {
    let host = TextHost::new("a;b")
        .with_data("separator", ";")
        .with_data("x-position", "left")
        .with_data("variant", "info");
    let field = TagField::attach(host).unwrap();

    assert_eq!(field.get_values(), vec!["a", "b"]);
    assert_eq!(field.config().placement, ChipPlacement::Leading);
    assert!(field.view().chips.iter().all(|c| c.variant == "info"));
}

#[test]
fn test_empty_separator_uses_comma() {
    let host = TextHost::new("a,b").with_data("separator", "");
    let mut field = TagField::attach(host).unwrap();

    assert_eq!(field.config().separator, ",");
    assert_eq!(field.get_values(), vec!["a", "b"]);
    field.add_value("c");
    assert_eq!(field.get_value(), "a,b,c");
}

#[test]
fn test_custom_transform_registry() {
    let mut registry = TransformRegistry::default();
    registry.register("slug", |text| text.replace(' ', "-").to_lowercase());
    let host = TextHost::new("").with_data("transform", "slug");
    let mut field = TagField::attach_with(host, &registry).unwrap();

    field.dispatch(tagfield::Msg::Draft(tagfield::messages::DraftMsg::Input(
        "Hello World,".to_string(),
    )));
    assert_eq!(field.get_values(), vec!["hello-world"]);
}

#[test]
fn test_unknown_transform_fails_attach() {
    let host = TextHost::new("").with_data("transform", "input => input.toUpperCase()");
    assert!(TagField::attach(host).is_err());
}
