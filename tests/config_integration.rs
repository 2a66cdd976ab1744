//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables,
//! and that the shipped shape files load.

use std::path::PathBuf;

use serial_test::serial;
use wire4d::config::AppConfig;
use wire4d::shape_loader::shape_for;
use wire4d_core::{RotationPlane, ShapeKind};

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("W4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load_from(manifest_path("config")).unwrap();
    std::env::remove_var("W4D_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_selects_shape_kind() {
    std::env::set_var("W4D_SHAPE__KIND", "cube");
    let config = AppConfig::load_from(manifest_path("config")).unwrap();
    std::env::remove_var("W4D_SHAPE__KIND");
    assert_eq!(config.shape.kind, ShapeKind::Cube);
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    let from_file = AppConfig::load_from(manifest_path("config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(from_file.window.width, defaults.window.width);
    assert_eq!(from_file.window.height, defaults.window.height);
    assert_eq!(from_file.projection.camera_distance, 2.0);
    assert_eq!(
        from_file.animation.animated_planes,
        vec![RotationPlane::XZ, RotationPlane::WX]
    );
    assert_eq!(from_file.colors.style(), defaults.colors.style());
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let config = AppConfig::load_from(manifest_path("no-such-config-dir")).unwrap();
    assert_eq!(config.window.width, 500);
    assert_eq!(config.shape.kind, ShapeKind::Tesseract);
}

#[test]
fn test_prism_shape_file() {
    let shape = ShapeKind::Cube
        .load(manifest_path("assets/shapes/triangular_prism.ron"))
        .unwrap();
    assert_eq!(shape.name(), "triangular prism");
    assert_eq!(shape.dimension(), 3);
    assert_eq!(shape.vertex_count(), 6);
    assert_eq!(shape.edges().len(), 9);
}

#[test]
fn test_pentachoron_shape_file() {
    let shape = ShapeKind::Tesseract
        .load(manifest_path("assets/shapes/pentachoron.ron"))
        .unwrap();
    assert_eq!(shape.dimension(), 4);
    assert_eq!(shape.vertex_count(), 5);
    // Every pair of vertices is joined exactly once
    assert_eq!(shape.edges().len(), 10);
}

#[test]
fn test_configured_path_replaces_built_in() {
    let mut config = AppConfig::default();
    config.shape.kind = ShapeKind::Cube;
    config.shape.path = Some(
        manifest_path("assets/shapes/triangular_prism.ron")
            .to_string_lossy()
            .into_owned(),
    );
    let shape = shape_for(&config.shape, ShapeKind::Cube);
    assert_eq!(shape.vertex_count(), 6);
}
