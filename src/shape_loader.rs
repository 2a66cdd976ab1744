//! Picks the geometry for a shape kind
//!
//! A configured shape file replaces the built-in geometry of its kind. A file
//! that fails to load is logged and the built-in shape is used instead.

use wire4d_core::{ShapeKind, Wireframe};

use crate::config::ShapeConfig;

/// Geometry to show for `kind`
pub fn shape_for(config: &ShapeConfig, kind: ShapeKind) -> Box<dyn Wireframe> {
    let shape = match (&config.path, kind == config.kind) {
        (Some(path), true) => kind.load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load shape file '{}': {}. Using built-in {:?}.", path, e, kind);
            kind.build()
        }),
        _ => kind.build(),
    };

    log::info!(
        "Showing '{}': {} vertices, {} edges, {} rotation planes",
        shape.name(),
        shape.vertex_count(),
        shape.edges().len(),
        shape.planes().len()
    );
    shape
}
