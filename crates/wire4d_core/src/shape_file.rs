//! RON shape files
//!
//! A shape file lists vertices and face loops for either dimensionality:
//!
//! ```ron
//! (
//!     name: Some("prism"),
//!     vertices: [(x: 0.0, y: 0.5, z: -0.5), ...],
//!     faces: [[0, 1, 2], [0, 3]],
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use wire4d_math::Vector;

use crate::shape::{Face, ShapeError, WireShape};

/// Serialized form of a [`WireShape`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeFile<V> {
    /// Display name (defaults to the file stem)
    #[serde(default)]
    pub name: Option<String>,
    pub vertices: Vec<V>,
    pub faces: Vec<Face>,
}

impl<V> ShapeFile<V>
where
    V: Vector + for<'de> Deserialize<'de>,
{
    /// Parse a shape file from RON text
    pub fn from_ron(contents: &str) -> Result<Self, ShapeLoadError> {
        Ok(ron::from_str(contents)?)
    }

    /// Validate into a shape, falling back to `default_name` when unnamed
    pub fn into_shape(self, default_name: &str) -> Result<WireShape<V>, ShapeLoadError> {
        let name = self.name.unwrap_or_else(|| default_name.to_string());
        Ok(WireShape::new(name, self.vertices, self.faces)?)
    }
}

/// Load and validate a shape from a RON file
pub fn load_shape<V, P>(path: P) -> Result<WireShape<V>, ShapeLoadError>
where
    V: Vector + for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let file = ShapeFile::<V>::from_ron(&contents)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("shape");
    let shape = file.into_shape(stem)?;
    log::info!(
        "Loaded shape '{}' from {}: {} vertices, {} faces",
        shape.name(),
        path.display(),
        shape.vertices().len(),
        shape.faces().len()
    );
    Ok(shape)
}

/// Error loading a shape file
#[derive(Debug)]
pub enum ShapeLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax or wrong vertex dimensionality)
    Parse(ron::error::SpannedError),
    /// The file parsed but its faces don't fit its vertices
    Invalid(ShapeError),
}

impl From<io::Error> for ShapeLoadError {
    fn from(e: io::Error) -> Self {
        ShapeLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ShapeLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        ShapeLoadError::Parse(e)
    }
}

impl From<ShapeError> for ShapeLoadError {
    fn from(e: ShapeError) -> Self {
        ShapeLoadError::Invalid(e)
    }
}

impl std::fmt::Display for ShapeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeLoadError::Io(e) => write!(f, "IO error: {}", e),
            ShapeLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            ShapeLoadError::Invalid(e) => write!(f, "Invalid shape: {}", e),
        }
    }
}

impl std::error::Error for ShapeLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeLoadError::Io(e) => Some(e),
            ShapeLoadError::Parse(e) => Some(e),
            ShapeLoadError::Invalid(e) => Some(e),
        }
    }
}
