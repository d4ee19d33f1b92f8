//! Integration tests for config module public API.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tplspec::config::{load_build_config, BuildConfig, BuildOverrides, DEFAULT_REGISTRY_URL};
use tplspec::TplspecError;

#[test]
fn defaults_match_catalog_layout() {
    let config = BuildConfig::default();
    assert_eq!(config.template_file_name, "template.yml");
    assert_eq!(config.output_path(), PathBuf::from("./_tmp/template-spec.json"));
    assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
    assert!(config.registry_file.is_none());
}

#[test]
fn project_file_then_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tplspec.yml"),
        r#"
collection_dir: catalog
output_file_name: spec.json
registry_file: local.json
timeout: 5
"#,
    )
    .unwrap();

    let overrides = BuildOverrides {
        registry_url: Some("https://example.com/spec.json".to_string()),
        ..Default::default()
    };
    let config = load_build_config(temp.path(), None, &overrides).unwrap();

    assert_eq!(config.collection_dir, temp.path().join("catalog"));
    assert_eq!(
        config.output_path(),
        temp.path().join("./_tmp").join("spec.json")
    );
    assert_eq!(config.registry_url, "https://example.com/spec.json");
    assert!(config.registry_file.is_none());
    assert_eq!(config.timeout, 5);
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let err = load_build_config(
        temp.path(),
        Some(Path::new("/nonexistent/tplspec.yml")),
        &BuildOverrides::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TplspecError::ConfigNotFound { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tplspec.yml"), "colection_dir: typo\n").unwrap();

    let err = load_build_config(temp.path(), None, &BuildOverrides::default()).unwrap_err();
    assert!(matches!(err, TplspecError::ConfigParseError { .. }));
}
