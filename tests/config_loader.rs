use blue_margarita::config::{AuthType, Config, ConfigError, ConfigStore, CredentialStatus};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.auth.auth_type(), AuthType::Bearer);
    assert!(config.auth.token.is_none());
    assert_eq!(config.lists.page_size, 20);
    assert_eq!(config.lists.debounce_ms, 500);
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("blue-margarita/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.lists.page_size, 20);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://shop.example.com"

[auth]
token = "abc"

[lists]
page_size = 12
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://shop.example.com");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.lists.page_size, 12);
    assert_eq!(config.lists.debounce_ms, 500);
    assert!(matches!(
        config.auth.resolve_credential(),
        CredentialStatus::Configured(token) if token.expose() == "abc"
    ));
}

#[test]
fn test_auth_none_needs_no_token() {
    let (_dir, path) = write_config("[auth]\nauth_type = \"none\"\n");
    let config = Config::load_from(&path).unwrap();
    assert!(matches!(config.auth.resolve_credential(), CredentialStatus::NoAuth));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_values_fail_validation() {
    let (_dir, path) = write_config("[lists]\ndebounce_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("debounce_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_store_overrides_and_reload() {
    let (_dir, path) = write_config("[api]\nbase_url = \"http://one:8080\"\n");
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());

    store.apply_overrides(Some("http://override:9000/"), Some("jwt-from-cli"));
    assert_eq!(store.get().api.base_url, "http://override:9000");
    assert_eq!(store.get().auth.token.as_deref(), Some("jwt-from-cli"));

    store.update(|config| config.lists.page_size = 50);
    assert_eq!(store.get().lists.page_size, 50);

    fs::write(&path, "[api]\nbase_url = \"http://two:8080\"\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().api.base_url, "http://two:8080");

    fs::write(&path, "[api]\nbase_url = \"ftp://nope\"\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().api.base_url, "http://two:8080");
}
