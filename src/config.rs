//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use wire4d_core::{AngleState, Animator, ShapeKind};
use wire4d_math::{Projector, RotationPlane};
use wire4d_render::CanvasStyle;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Shape selection
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Perspective projection
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Angle animation
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Canvas colours
    #[serde(default)]
    pub colors: ColorsConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`W4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // W4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
///
/// The window's inner area is the drawing canvas, so `width` and `height`
/// are also the canvas size used for screen mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window title
    pub title: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "wire4d - Tesseract Wireframe".to_string(),
            width: 500,
            height: 500,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Which shape to show at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Built-in shape kind (`"tesseract"` or `"cube"`)
    pub kind: ShapeKind,
    /// RON shape file replacing the built-in geometry of `kind`
    pub path: Option<String>,
}

/// Perspective projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance added to z before the perspective divide
    pub camera_distance: f32,
    /// Smallest allowed depth magnitude; unset lets a zero depth produce
    /// non-finite coordinates
    pub min_depth: Option<f32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            camera_distance: 2.0,
            min_depth: None,
        }
    }
}

impl ProjectionConfig {
    pub fn to_projector(&self) -> Projector {
        Projector::new(self.camera_distance).with_min_depth(self.min_depth)
    }
}

/// Animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Start with animation running
    pub running: bool,
    /// Degrees advanced per tick
    pub step_degrees: f32,
    /// Reference tick length in milliseconds
    pub tick_ms: f32,
    /// Planes animated at startup
    pub animated_planes: Vec<RotationPlane>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            running: true,
            step_degrees: 1.0,
            tick_ms: 15.0,
            animated_planes: vec![RotationPlane::XZ, RotationPlane::WX],
        }
    }
}

impl AnimationConfig {
    pub fn to_animator(&self) -> Animator {
        Animator::new(self.step_degrees.to_radians(), self.tick_ms)
    }

    /// Angle state at startup: all angles zero, configured planes animated
    pub fn initial_angles(&self) -> AngleState {
        AngleState::new()
            .with_animated(&self.animated_planes)
            .with_running(self.running)
    }
}

/// Canvas colours as sRGB `[r, g, b, a]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub background: [f32; 4],
    pub foreground: [f32; 4],
}

impl Default for ColorsConfig {
    fn default() -> Self {
        let style = CanvasStyle::default();
        Self {
            background: style.background,
            foreground: style.foreground,
        }
    }
}

impl ColorsConfig {
    pub fn style(&self) -> CanvasStyle {
        CanvasStyle {
            background: self.background,
            foreground: self.foreground,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 500);
        assert_eq!(config.shape.kind, ShapeKind::Tesseract);
        assert_eq!(config.projection.camera_distance, 2.0);
        assert!(config.projection.min_depth.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("camera_distance"));
        assert!(toml.contains("animated_planes"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[shape]\nkind = \"cube\"\n[animation]\nanimated_planes = [\"XY\"]"))
            .extract()
            .unwrap();
        assert_eq!(config.shape.kind, ShapeKind::Cube);
        assert!(config.shape.path.is_none());
        assert_eq!(config.animation.animated_planes, vec![RotationPlane::XY]);
        assert_eq!(config.animation.tick_ms, 15.0);
        assert_eq!(config.window.width, 500);
    }

    #[test]
    fn test_unknown_shape_kind_rejected() {
        let result: Result<AppConfig, _> = Figment::new()
            .merge(Toml::string("[shape]\nkind = \"sphere\""))
            .extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_angles() {
        let angles = AnimationConfig::default().initial_angles();
        assert!(angles.running);
        assert!(angles.is_animated(RotationPlane::XZ));
        assert!(angles.is_animated(RotationPlane::WX));
        assert!(!angles.is_animated(RotationPlane::YZ));
        assert_eq!(angles.angle(RotationPlane::XZ), 0.0);
    }

    #[test]
    fn test_animator_from_degrees() {
        let animator = AnimationConfig::default().to_animator();
        assert!((animator.step - std::f32::consts::PI / 180.0).abs() < 1e-7);
        assert_eq!(animator.tick_ms, 15.0);
    }

    #[test]
    fn test_projector_from_config() {
        let config = ProjectionConfig {
            camera_distance: 2.0,
            min_depth: Some(0.01),
        };
        let projector = config.to_projector();
        assert_eq!(projector.camera_distance, 2.0);
        assert_eq!(projector.min_depth, Some(0.01));
    }

    #[test]
    fn test_default_colors_match_style() {
        assert_eq!(ColorsConfig::default().style(), CanvasStyle::default());
    }
}
