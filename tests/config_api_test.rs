//! Integration tests for config module public API.

use showroom::config::{load_config, load_merged_config, validate, ShowroomConfig, CONFIG_DIR};
use showroom::locale::Locale;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = ShowroomConfig::default();
    assert_eq!(config.locale, Locale::English);
    assert_eq!(config.inventory.debounce_ms, 500);
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();

    fs::write(
        dir.join("config.yml"),
        r#"
dealer_name: Riyadh Motors
locale: ar
submission:
  endpoint: https://crm.example.com/leads
  timeout_secs: 10
inventory:
  path: stock.yml
"#,
    )
    .unwrap();
    fs::write(dir.join("config.local.yml"), "submission:\n  timeout_secs: 5\n").unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.locale, Locale::Arabic);
    assert_eq!(
        config.submission.endpoint.as_deref(),
        Some("https://crm.example.com/leads")
    );
    assert_eq!(config.submission.timeout_secs, 5);
    assert!(config.export.embed_images);
}

#[test]
fn invalid_values_fail_validation() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("kiosk.yml");
    fs::write(&file, "submission:\n  endpoint: crm.example.com\n").unwrap();

    let config = load_config(temp.path(), Some(&file)).unwrap();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("http://"));
}
