use tempfile::TempDir;
use timelane::config::TimelaneConfig;
use timelane::timeline::{LayoutMode, PackingBasis};

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = TimelaneConfig::load_from(tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.layout.default_lane_width, 40);
    assert_eq!(config.layout.mode, LayoutMode::Split);
}

#[test]
fn file_values_override_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
min_item_width = 90
packing = "pixels"

[viewport]
anchor_epsilon = 2.0
"#,
    )
    .unwrap();

    let config = TimelaneConfig::load_from(&path).unwrap();
    assert_eq!(config.layout.min_item_width, 90);
    assert_eq!(config.layout.packing, PackingBasis::Pixels);
    assert_eq!(config.viewport.anchor_epsilon, 2.0);
    assert_eq!(config.layout.lane_height, 80);
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[layout]\nmode = \"sideways\"\n").unwrap();

    let err = TimelaneConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config TOML"));
}
