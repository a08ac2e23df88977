use displayfetch::config::{load_config_from, ColorMode, Config};
use displayfetch::DisplayfetchError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r##"
[display]
color = "always"
show_session = false
value_color = "accent"

[colors]
accent = "#00ff00"

[probes]
drm_path = "/tmp/drm"
lspci_command = "/usr/sbin/lspci"
command_timeout_ms = 500
scale_factor = 2
"##,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.display.color, ColorMode::Always);
    assert_eq!(config.display.show_session, Some(false));
    assert_eq!(config.colors.get("accent").map(String::as_str), Some("#00ff00"));
    assert_eq!(config.probes.lspci_command, "/usr/sbin/lspci");
    assert_eq!(config.probes.glxinfo_command, "glxinfo");
    assert_eq!(config.probes.command_timeout(), Duration::from_millis(500));
    assert_eq!(config.probes.scale_factor, Some(2));
    assert_eq!(config.probes.drm_root(), std::path::PathBuf::from("/tmp/drm"));
}

#[test]
fn test_config_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.display.color, ColorMode::Auto);
    assert!(config.colors.is_empty());
}

#[test]
fn test_config_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DisplayfetchError::Config(_)));
}

#[test]
fn test_config_bad_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display\ncolor = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, DisplayfetchError::Toml(_)));
}

#[test]
fn test_config_default_roundtrip() {
    let config = Config::default();
    assert!(!config.color_enabled(false, false));
}
