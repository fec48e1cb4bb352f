mod common;

use common::write_file;
use hellowshop::{initialize, read_config_map, Config, StorefrontError, Theme};

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "config.toml",
        r#"
theme = "midnight"
free_shipping_threshold = 30000
shipping_fee = 2500
related_limit = "2"
suggested_terms = ["원신", "미쿠"]
"#,
    );

    let config = Config::from_toml_file(&path).unwrap();
    assert_eq!(config.theme_name.as_deref(), Some("midnight"));
    assert_eq!(config.free_shipping_threshold, 30_000);
    assert_eq!(config.shipping_fee, 2_500);
    assert_eq!(config.related_limit, 2);
    assert_eq!(config.suggested_terms, vec!["원신", "미쿠"]);
    assert_eq!(config.home_section_size, 4);
}

#[test]
fn shipping_policy_comes_from_config() {
    let config = Config {
        free_shipping_threshold: 10_000,
        shipping_fee: 1_000,
        ..Config::default()
    };
    let mut state = initialize(&config).unwrap();
    state.add_to_cart("13", 1).unwrap();
    assert_eq!(state.cart.shipping_fee(), 1_000);

    state.add_to_cart("13", 1).unwrap();
    assert_eq!(state.cart.shipping_fee(), 0);
}

#[test]
fn map_layering_lets_later_values_win() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.toml", "shipping_fee = 2500\ntheme = \"sakura\"\n");

    let mut map = read_config_map(&path).unwrap();
    map.insert("theme".to_string(), "midnight".to_string());

    let config = Config::from_map(&map);
    assert_eq!(config.shipping_fee, 2_500);
    assert_eq!(config.theme_name.as_deref(), Some("midnight"));
}

#[test]
fn invalid_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.toml", "theme = \n");
    assert!(matches!(Config::from_toml_file(&path), Err(StorefrontError::Config(_))));

    let missing = dir.path().join("absent.toml");
    assert!(matches!(Config::from_toml_file(missing), Err(StorefrontError::Config(_))));
}

#[test]
fn custom_theme_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let sakura = Theme::default();
    let mut custom = toml::to_string(&sakura).unwrap();
    custom = custom.replace(&format!("name = \"{}\"", sakura.name), "name = \"custom\"");
    let path = write_file(&dir, "theme.toml", &custom);

    let config = Config {
        theme_file: Some(path.display().to_string()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).unwrap().theme.name, "custom");
}

#[test]
fn broken_theme_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "theme.toml", "not a theme");

    let config = Config {
        theme_file: Some(path.display().to_string()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).unwrap().theme.name, Theme::default().name);
}
