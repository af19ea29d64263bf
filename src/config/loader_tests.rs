//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_tabview_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("tabview") && path_str.ends_with("config.toml"),
        "Path should contain 'tabview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_tabview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("tabview.log"),
        "Default log path should end with 'tabview.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "tabview_test_config.toml",
        r#"
base_url = "http://localhost:3000"
timeout_secs = 3
default_page_size = 20
default_resource = "products"
product_tabs = ["laptops", "fragrances"]
log_file_path = "/tmp/tabview-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("File exists");

    assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
    assert_eq!(config.timeout_secs, Some(3));
    assert_eq!(config.default_page_size, Some(20));
    assert_eq!(config.default_resource, Some(ResourceKind::Products));
    assert_eq!(
        config.product_tabs,
        Some(vec!["laptops".to_string(), "fragrances".to_string()])
    );
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/tabview-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("tabview_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = write_temp_config("tabview_test_unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&config_path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_resource() {
    let config_path =
        write_temp_config("tabview_test_bad_resource.toml", "default_resource = \"carts\"\n");

    assert!(matches!(
        load_config_file(&config_path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp_config("tabview_test_partial.toml", "timeout_secs = 30\n");

    let config = load_config_file(&config_path).unwrap().unwrap();

    assert_eq!(config.timeout_secs, Some(30));
    assert_eq!(config.base_url, None);

    fs::remove_file(config_path).ok();
}

// ===== merge_config =====

#[test]
fn merge_config_without_file_uses_defaults() {
    let resolved = merge_config(None).unwrap();

    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.base_url, "https://dummyjson.com");
    assert_eq!(resolved.page_size, PageSize::Five);
    assert_eq!(resolved.resource, ResourceKind::Users);
    assert_eq!(resolved.product_tabs, vec!["laptops".to_string()]);
}

#[test]
fn merge_config_prefers_file_values() {
    let file = ConfigFile {
        base_url: Some("http://example.test".to_string()),
        default_page_size: Some(50),
        default_resource: Some(ResourceKind::Products),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).unwrap();

    assert_eq!(resolved.base_url, "http://example.test");
    assert_eq!(resolved.page_size, PageSize::Fifty);
    assert_eq!(resolved.resource, ResourceKind::Products);
    assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn merge_config_rejects_unsupported_page_size() {
    let file = ConfigFile {
        default_page_size: Some(7),
        ..ConfigFile::default()
    };

    let err = merge_config(Some(file)).unwrap_err();

    assert!(
        matches!(err, ConfigError::InvalidValue { field: "default_page_size", .. }),
        "got {:?}",
        err
    );
}

#[test]
fn merge_config_rejects_zero_timeout() {
    let file = ConfigFile {
        timeout_secs: Some(0),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue { field: "timeout_secs", .. })
    ));
}

#[test]
fn merge_config_empty_tab_list_is_kept() {
    let file = ConfigFile {
        product_tabs: Some(Vec::new()),
        ..ConfigFile::default()
    };

    assert!(merge_config(Some(file)).unwrap().product_tabs.is_empty());
}

// ===== Env overrides =====

#[test]
#[serial(tabview_env)]
fn env_base_url_overrides_file() {
    env::set_var(BASE_URL_ENV, "http://from-env.test");

    let resolved = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(BASE_URL_ENV);
    assert_eq!(resolved.base_url, "http://from-env.test");
}

#[test]
#[serial(tabview_env)]
fn missing_env_leaves_config_unchanged() {
    env::remove_var(BASE_URL_ENV);

    let resolved = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
#[serial(tabview_env)]
fn config_env_var_selects_file() {
    let config_path = write_temp_config("tabview_test_env_path.toml", "timeout_secs = 42\n");
    env::set_var(CONFIG_ENV, &config_path);

    let result = load_config_with_precedence(None);

    env::remove_var(CONFIG_ENV);
    fs::remove_file(&config_path).ok();
    assert_eq!(result.unwrap().unwrap().timeout_secs, Some(42));
}

#[test]
#[serial(tabview_env)]
fn explicit_path_beats_config_env_var() {
    let env_path = write_temp_config("tabview_test_env_loser.toml", "timeout_secs = 1\n");
    let cli_path = write_temp_config("tabview_test_cli_winner.toml", "timeout_secs = 2\n");
    env::set_var(CONFIG_ENV, &env_path);

    let result = load_config_with_precedence(Some(cli_path.clone()));

    env::remove_var(CONFIG_ENV);
    fs::remove_file(&env_path).ok();
    fs::remove_file(&cli_path).ok();
    assert_eq!(result.unwrap().unwrap().timeout_secs, Some(2));
}

// ===== CLI overrides =====

#[test]
fn cli_overrides_win_over_everything() {
    let base = ResolvedConfig {
        base_url: "http://from-file.test".to_string(),
        ..ResolvedConfig::default()
    };
    let cli = CliOverrides {
        resource: Some(ResourceKind::Products),
        page_size: Some(PageSize::Twenty),
        search: Some("phone".to_string()),
        base_url: Some("http://from-cli.test".to_string()),
        timeout_secs: Some(5),
    };

    let resolved = apply_cli_overrides(base, cli);

    assert_eq!(resolved.resource, ResourceKind::Products);
    assert_eq!(resolved.page_size, PageSize::Twenty);
    assert_eq!(resolved.initial_search.as_deref(), Some("phone"));
    assert_eq!(resolved.base_url, "http://from-cli.test");
    assert_eq!(resolved.timeout_secs, 5);
}

#[test]
fn absent_cli_flags_keep_lower_precedence_values() {
    let base = ResolvedConfig {
        timeout_secs: 99,
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(base.clone(), CliOverrides::default());

    assert_eq!(resolved, base);
}
