use enumkit_kernel::config::load_config;
use enumkit_kernel::domain::config::RegistryConfig;
use serde::Deserialize;
use serial_test::serial;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    name: String,
    registry: RegistryConfig,
}

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
#[serial(config)]
fn loads_nested_toml_sections() {
    let file = write_config(".toml", "name = \"cards\"\n\n[registry]\neager = true\n");

    let cfg: AppConfig = load_config(Some(file.path())).expect("config load");
    assert_eq!(cfg.name, "cards");
    assert!(cfg.registry.eager);
}

#[test]
#[serial(config)]
fn loads_json_by_extension() {
    let file = write_config(".json", r#"{ "registry": { "eager": true } }"#);

    let cfg: AppConfig = load_config(Some(file.path())).expect("config load");
    assert!(cfg.name.is_empty());
    assert!(cfg.registry.eager);
}

#[test]
#[serial(config)]
fn missing_sections_fall_back_to_defaults() {
    let cfg: AppConfig = load_config(None::<&Path>).expect("config load");
    assert_eq!(cfg.registry, RegistryConfig::default());
}

#[test]
#[serial(config)]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config::<AppConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert_eq!(err.kind(), "Config");
    assert_eq!(err.context(), Some("Failed to build config"));
}

#[test]
#[serial(config)]
fn mistyped_value_is_a_deserialize_error() {
    let file = write_config(".toml", "[registry]\neager = \"sometimes\"\n");

    let err = load_config::<AppConfig>(Some(file.path())).unwrap_err();
    assert_eq!(err.context(), Some("Failed to deserialize config"));
}
