/// Host-facing configuration for a wireframe display
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{ShapeKind, ShapeParameters};
use crate::transform::RotationState;

/// Recognized display options.
///
/// Missing fields fall back to the defaults, so a JSON file only needs the
/// options it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGenConfig {
    pub shape: ShapeKind,
    /// Uniform size; see [`ShapeKind::from_uniform_size`]
    pub size: f32,
    /// Shape center on the X/Y plane
    pub position: [f32; 2],
    /// Shape center along Z
    pub depth_offset: f32,
    /// Starting angles in degrees
    pub rotation: [f32; 3],
    /// Degrees per second around X, Y and Z
    pub rotation_speed: [f32; 3],
    pub segments: i32,
}

impl Default for LineGenConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cube,
            size: 1.0,
            position: [0.0, 0.0],
            depth_offset: 0.0,
            rotation: [0.0, 0.0, 0.0],
            rotation_speed: [30.0, 20.0, 10.0],
            segments: 12,
        }
    }
}

impl LineGenConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn center(&self) -> Point3<f32> {
        Point3::new(self.position[0], self.position[1], self.depth_offset)
    }

    pub fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(
            self.shape.from_uniform_size(self.size),
            self.center(),
            self.segments,
        )
    }

    pub fn rotation_state(&self) -> RotationState {
        RotationState::new(
            Vector3::from(self.rotation),
            Vector3::from(self.rotation_speed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::Shape;

    #[test]
    fn test_defaults() {
        let config = LineGenConfig::default();
        assert_eq!(config.shape, ShapeKind::Cube);
        assert_eq!(config.segments, 12);
        assert_eq!(config.rotation_state().speeds, Vector3::new(30.0, 20.0, 10.0));
        assert_eq!(config.rotation_state().angles, Vector3::zeros());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            LineGenConfig::from_json(r#"{ "shape": "Cylinder", "size": 0.5, "segments": 8 }"#)
                .unwrap();
        assert_eq!(config.segments, 8);
        assert_eq!(config.rotation_speed, [30.0, 20.0, 10.0]);

        let params = config.shape_parameters();
        assert_eq!(
            params.shape,
            Shape::Cylinder {
                radius: 0.5,
                height: 1.0
            }
        );
        assert_eq!(params.segments, 8);
    }

    #[test]
    fn test_position_and_depth_become_center() {
        let config = LineGenConfig {
            position: [1.0, -2.0],
            depth_offset: 3.0,
            ..LineGenConfig::default()
        };
        assert_eq!(config.shape_parameters().center, Point3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_malformed_json() {
        let err = LineGenConfig::from_json(r#"{ "shape": "Torus" }"#).unwrap_err();
        assert!(matches!(err, GeometryError::Config(_)));
    }

    #[test]
    fn test_json_survives_a_save() {
        let config = LineGenConfig {
            shape: ShapeKind::Sphere,
            segments: 20,
            ..LineGenConfig::default()
        };
        let saved = config.to_json().unwrap();
        assert_eq!(LineGenConfig::from_json(&saved).unwrap(), config);
    }
}
